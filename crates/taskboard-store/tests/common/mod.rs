/*
[INPUT]:  Test clock requirements
[OUTPUT]: Shared store fixtures for integration tests
[POS]:    Test infrastructure - shared across store test modules
[UPDATE]: When adding new fixtures
*/

//! Common test utilities for taskboard-store tests

use taskboard_store::{ManualClock, TaskStore};

pub const START_MILLIS: i64 = 1_700_000_000_000;

/// Store backed by a manual clock, plus the clock handle
pub fn store_with_clock() -> (TaskStore, ManualClock) {
    let clock = ManualClock::new(START_MILLIS);
    (TaskStore::with_clock(clock.clone()), clock)
}

/// Texts of the given view in order
#[allow(dead_code)]
pub fn texts(view: &[&taskboard_store::Task]) -> Vec<String> {
    view.iter().map(|task| task.text.clone()).collect()
}
