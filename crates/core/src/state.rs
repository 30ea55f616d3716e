//! Observable state cell shared between store actions and view bindings.

use tokio::sync::watch;

/// Holds a state snapshot and fans out every change to subscribers.
///
/// Mutations never block and succeed whether or not anyone is subscribed.
#[derive(Debug)]
pub struct StateContainer<S> {
    sender: watch::Sender<S>,
}

impl<S: Clone> StateContainer<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    /// Returns a clone of the current snapshot.
    pub fn get(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Reads the current snapshot without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Replaces the snapshot and notifies subscribers.
    pub fn set(&self, state: S) {
        self.sender.send_replace(state);
    }

    /// Mutates the snapshot in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        self.sender.send_modify(f);
    }

    /// Receiver that observes every snapshot published after this call.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }
}

impl<S: Clone + Default> Default for StateContainer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_update_replace_snapshot() {
        let container = StateContainer::new(vec![1, 2]);
        container.set(vec![3]);
        assert_eq!(container.get(), vec![3]);

        container.update(|v| v.push(4));
        assert_eq!(container.get(), vec![3, 4]);
        assert_eq!(container.with(|v| v.len()), 2);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let container: StateContainer<u32> = StateContainer::default();
        let mut rx = container.subscribe();
        assert!(!rx.has_changed().unwrap());

        container.update(|n| *n += 5);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 5);

        container.set(7);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow(), 7);
    }
}
