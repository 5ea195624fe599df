/*
[INPUT]:  Successful store mutations
[OUTPUT]: Change notifications delivered to registered subscribers
[POS]:    Notification layer - replaces implicit reactivity with explicit callbacks
[UPDATE]: When adding store event kinds
*/

use std::fmt;

use crate::task::TaskId;

/// Change emitted after every successful store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was appended
    Added(TaskId),
    /// Text, completion or priority of a task changed
    Updated(TaskId),
    /// A task entered or left edit mode
    EditingChanged(TaskId),
    /// A task was deleted
    Removed(TaskId),
}

impl StoreEvent {
    pub fn task_id(&self) -> TaskId {
        match *self {
            StoreEvent::Added(id)
            | StoreEvent::Updated(id)
            | StoreEvent::EditingChanged(id)
            | StoreEvent::Removed(id) => id,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StoreEvent)>;

/// Ordered subscriber registry.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: StoreEvent) {
        for (_, callback) in self.entries.iter_mut() {
            callback(&event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let first = seen.clone();
        subscribers.add(Box::new(move |_| first.borrow_mut().push("first")));
        let second = seen.clone();
        subscribers.add(Box::new(move |_| second.borrow_mut().push("second")));

        subscribers.notify(StoreEvent::Added(TaskId::new(1)));
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn remove_unknown_subscription_is_false() {
        let mut subscribers = Subscribers::default();
        let id = subscribers.add(Box::new(|_| {}));
        assert!(subscribers.remove(id));
        assert!(!subscribers.remove(id));
        assert_eq!(subscribers.len(), 0);
    }
}
