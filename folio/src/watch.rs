//! "Observe until first match, then detach."
//!
//! Intersection observers report every crossing of their threshold, in both
//! directions. The effects built on them (skill bar fill, entrance animation)
//! must run once per element. `OneShotWatcher` keeps that bookkeeping
//! independent of any rendering engine: the host feeds it samples and
//! stops observing an element as soon as [`OneShotWatcher::record`] fires.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OneShotWatcher<K> {
    pending: HashSet<K>,
    fired: HashSet<K>,
}

impl<K: Eq + Hash> Default for OneShotWatcher<K> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
            fired: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> OneShotWatcher<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns false if it is already watched or has
    /// already fired.
    pub fn watch(&mut self, key: K) -> bool {
        if self.fired.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    /// Feed one visibility sample.
    ///
    /// Returns true exactly once per key: on its first intersecting sample.
    /// The caller applies its effect and detaches the observation. Samples
    /// for unknown or already fired keys return false.
    pub fn record(&mut self, key: &K, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.pending.take(key) {
            Some(key) => {
                self.fired.insert(key);
                true
            }
            None => false,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_intersection() {
        let mut w = OneShotWatcher::new();
        assert!(w.watch(7));
        assert!(!w.record(&7, false));
        assert!(w.record(&7, true));
        assert!(!w.record(&7, false));
        assert!(!w.record(&7, true));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut w: OneShotWatcher<&str> = OneShotWatcher::new();
        assert!(!w.record(&"ghost", true));
        assert!(w.watch("ghost"));
    }

    #[test]
    fn fired_keys_cannot_be_rewatched() {
        let mut w = OneShotWatcher::new();
        w.watch(1);
        assert!(!w.watch(1));
        w.record(&1, true);
        assert!(!w.watch(1));
        assert!(!w.record(&1, true));
    }

    #[test]
    fn keys_are_independent() {
        let mut w = OneShotWatcher::new();
        w.watch('a');
        w.watch('b');
        assert!(w.record(&'b', true));
        assert!(w.record(&'a', true));
        assert!(!w.record(&'b', true));
    }
}
