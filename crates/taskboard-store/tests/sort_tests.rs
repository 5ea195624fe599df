/*
[INPUT]:  Tasks created through the store with a controlled clock
[OUTPUT]: Test results for derived display ordering
[POS]:    Integration tests - sort projection
[UPDATE]: When sort keys or tie-breaking change
*/

mod common;

use common::{store_with_clock, texts};
use taskboard_store::{Priority, SortKey};

#[test]
fn created_at_sort_puts_most_recent_first() {
    let (mut store, clock) = store_with_clock();
    store.add("A");
    clock.advance(1_000);
    store.add("B");
    clock.advance(1_000);
    store.add("C");

    assert_eq!(texts(&store.sorted(SortKey::CreatedAt)), vec!["C", "B", "A"]);
}

#[test]
fn created_at_sort_holds_without_clock_movement() {
    let (mut store, _) = store_with_clock();
    store.add("A");
    store.add("B");
    store.add("C");

    assert_eq!(texts(&store.sorted(SortKey::CreatedAt)), vec!["C", "B", "A"]);
}

#[test]
fn priority_sort_beats_creation_order() {
    let (mut store, clock) = store_with_clock();
    let a = store.add("A").unwrap();
    clock.advance(10);
    store.add("B");
    clock.advance(10);
    store.add("C");

    store.set_priority(a, Priority::High);

    let view = texts(&store.sorted(SortKey::Priority));
    assert_eq!(view[0], "A");
    // equal priorities keep insertion order
    assert_eq!(view, vec!["A", "B", "C"]);
}

#[test]
fn high_priority_precedes_low_regardless_of_age() {
    let (mut store, clock) = store_with_clock();
    store.add("old low");
    clock.advance(5);
    let newer = store.add("new high").unwrap();
    store.set_priority(newer, Priority::High);

    let (mut reversed, clock) = store_with_clock();
    let older = reversed.add("old high").unwrap();
    reversed.set_priority(older, Priority::High);
    clock.advance(5);
    reversed.add("new low");

    assert_eq!(texts(&store.sorted(SortKey::Priority))[0], "new high");
    assert_eq!(texts(&reversed.sorted(SortKey::Priority))[0], "old high");
}

#[test]
fn sorting_never_changes_canonical_order() {
    let (mut store, _) = store_with_clock();
    store.add("first");
    let second = store.add("second").unwrap();
    store.set_priority(second, Priority::High);

    let _ = store.sorted(SortKey::Priority);
    let _ = store.sorted(SortKey::CreatedAt);

    let canonical: Vec<&str> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(canonical, vec!["first", "second"]);
}
