//! Read-only projections over a store.

use tokio::sync::watch;

/// A read-only value computed from another store's current state.
///
/// Holds no state of its own; every read re-applies the projection to the
/// source's latest value.
pub struct Derived<S, T> {
    source: watch::Receiver<S>,
    project: fn(&S) -> T,
}

impl<S, T> Derived<S, T> {
    pub fn new(source: watch::Receiver<S>, project: fn(&S) -> T) -> Self {
        Self { source, project }
    }

    /// Current projected value.
    pub fn get(&self) -> T {
        (self.project)(&self.source.borrow())
    }

    /// Wait for the source to change and return the new projected value.
    ///
    /// Returns `None` once the source store has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.source.changed().await.ok()?;
        Some((self.project)(&self.source.borrow_and_update()))
    }
}

impl<S, T> Clone for Derived<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            project: self.project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_tracks_source() {
        let (tx, rx) = watch::channel(String::new());
        let non_empty = Derived::new(rx, |s: &String| !s.is_empty());

        assert!(!non_empty.get());
        tx.send_replace("token".to_string());
        assert!(non_empty.get());
    }

    #[tokio::test]
    async fn test_changed_returns_none_after_source_dropped() {
        let (tx, rx) = watch::channel(0u32);
        let mut doubled = Derived::new(rx, |n: &u32| n * 2);

        tx.send_replace(4);
        assert_eq!(doubled.changed().await, Some(8));

        drop(tx);
        assert_eq!(doubled.changed().await, None);
    }
}
