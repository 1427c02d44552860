use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared flag telling the menu decorations to render expanded.
///
/// Expansion is held through [`ExpandGuard`]s. Guards are counted, so the
/// decorations stay expanded until the last one is dropped.
#[derive(Debug, Clone, Default)]
pub struct DecorationsStore {
    holders: Arc<AtomicUsize>,
}

impl DecorationsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expand(&self) -> ExpandGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        ExpandGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }
}

/// Keeps decorations expanded while alive.
#[derive(Debug)]
#[must_use = "decorations collapse as soon as the guard is dropped"]
pub struct ExpandGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ExpandGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_expands_until_dropped() {
        let store = DecorationsStore::new();
        assert!(!store.is_expanded());
        let guard = store.expand();
        assert!(store.is_expanded());
        drop(guard);
        assert!(!store.is_expanded());
    }

    #[test]
    fn nested_guards_are_counted() {
        let store = DecorationsStore::new();
        let outer = store.expand();
        let inner = store.clone().expand();
        drop(outer);
        assert!(store.is_expanded());
        drop(inner);
        assert!(!store.is_expanded());
    }
}
