/*
[INPUT]:  Fetch results and local removals from a synchronizer
[OUTPUT]: Observable collection snapshots via `watch`
[POS]:    State container shared by board and task synchronizers
[UPDATE]: When snapshot fields change
*/

use tokio::sync::watch;

/// Locally cached, remotely authoritative collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl<T> Default for SyncState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Store<T> {
    tx: watch::Sender<SyncState<T>>,
}

impl<T: Clone> Store<T> {
    pub(crate) fn new() -> Self {
        Self {
            tx: watch::Sender::new(SyncState::default()),
        }
    }

    pub(crate) fn snapshot(&self) -> SyncState<T> {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SyncState<T>> {
        self.tx.subscribe()
    }

    pub(crate) fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.tx.borrow().items.iter().find(|item| pred(item)).cloned()
    }

    pub(crate) fn begin_load(&self) {
        self.tx.send_modify(|state| state.is_loading = true);
    }

    /// Replace the collection wholesale.
    pub(crate) fn replace(&self, items: Vec<T>) {
        self.tx.send_modify(|state| {
            state.items = items;
            state.is_loading = false;
            state.last_error = None;
        });
    }

    /// Record a failed load; existing items stay.
    pub(crate) fn fail(&self, message: &str) {
        self.tx.send_modify(|state| {
            state.is_loading = false;
            state.last_error = Some(message.to_string());
        });
    }

    pub(crate) fn remove_where(&self, pred: impl Fn(&T) -> bool) {
        self.tx.send_modify(|state| state.items.retain(|item| !pred(item)));
    }

    pub(crate) fn clear(&self) {
        self.tx.send_modify(|state| {
            state.items.clear();
            state.is_loading = false;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_keeps_items() {
        let store = Store::new();
        store.replace(vec![1, 2, 3]);
        store.begin_load();
        store.fail("Failed to load boards");

        let state = store.snapshot();
        assert_eq!(state.items, vec![1, 2, 3]);
        assert!(!state.is_loading);
        assert_eq!(state.last_error.as_deref(), Some("Failed to load boards"));
    }

    #[test]
    fn test_replace_clears_error() {
        let store = Store::new();
        store.fail("Failed to load tasks");
        store.replace(vec!["a"]);
        assert_eq!(store.snapshot().last_error, None);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = Store::new();
        let mut rx = store.subscribe();
        store.replace(vec![7]);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().items, vec![7]);
        store.remove_where(|n| *n == 7);
        assert!(rx.borrow_and_update().items.is_empty());
    }
}
