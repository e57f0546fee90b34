use heapless::Vec;

use crate::StateId;
use crate::error::{ChainError, RegisterError};

/// Registry entry binding a state to its action and chain target
#[derive(Debug, Clone)]
pub struct Entry<S, A> {
    pub state: S,
    pub action: A,
    pub chained: S,
}

/// Fixed-capacity table of registered states
///
/// N is the maximum number of entries. Lookups are a linear scan and the
/// first matching entry wins.
#[derive(Debug)]
pub struct Registry<S, A, const N: usize> {
    entries: Vec<Entry<S, A>, N>,
}

impl<S: StateId, A, const N: usize> Registry<S, A, N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry chained to `fallback`
    ///
    /// Returns the action if the registry is full
    pub fn insert(&mut self, state: S, action: A, fallback: S) -> Result<(), RegisterError<A>> {
        self.entries
            .push(Entry {
                state,
                action,
                chained: fallback,
            })
            .map_err(|entry| RegisterError(entry.action))
    }

    /// Point every entry for `primary` at `secondary`
    pub fn chain(&mut self, primary: S, secondary: S) -> Result<(), ChainError> {
        if primary == secondary {
            return Err(ChainError::SelfChain);
        }
        let mut found = false;
        for entry in self.entries.iter_mut().filter(|entry| entry.state == primary) {
            entry.chained = secondary;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(ChainError::UnknownState)
        }
    }

    /// Chain target of `state`, if registered
    pub fn chained(&self, state: S) -> Option<S> {
        self.entries
            .iter()
            .find(|entry| entry.state == state)
            .map(|entry| entry.chained)
    }

    /// Action bound to `state`, if registered
    pub fn action_mut(&mut self, state: S) -> Option<&mut A> {
        self.entries
            .iter_mut()
            .find(|entry| entry.state == state)
            .map(|entry| &mut entry.action)
    }

    pub fn contains(&self, state: S) -> bool {
        self.entries.iter().any(|entry| entry.state == state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<S: StateId, A, const N: usize> Default for Registry<S, A, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_until_full() {
        let mut registry: Registry<u8, u8, 2> = Registry::new();
        assert_eq!(registry.insert(1, 10, 0), Ok(()));
        assert_eq!(registry.insert(2, 20, 0), Ok(()));
        assert_eq!(registry.insert(3, 30, 0), Err(RegisterError(30)));
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_first_match_wins() {
        let mut registry: Registry<u8, u8, 4> = Registry::new();
        let _ = registry.insert(1, 10, 0);
        let _ = registry.insert(1, 11, 0);
        assert_eq!(registry.action_mut(1).copied(), Some(10));
    }

    #[test]
    fn test_chain_rewrites_duplicates() {
        let mut registry: Registry<u8, u8, 4> = Registry::new();
        let _ = registry.insert(1, 10, 0);
        let _ = registry.insert(1, 11, 0);
        assert_eq!(registry.chain(1, 2), Ok(()));
        assert!(registry.entries.iter().all(|entry| entry.chained == 2));
    }

    #[test]
    fn test_chain_rejections() {
        let mut registry: Registry<u8, u8, 4> = Registry::new();
        let _ = registry.insert(1, 10, 0);
        assert_eq!(registry.chain(1, 1), Err(ChainError::SelfChain));
        assert_eq!(registry.chain(5, 1), Err(ChainError::UnknownState));
        assert_eq!(registry.chained(1), Some(0));
        assert_eq!(registry.chained(5), None);
    }
}
