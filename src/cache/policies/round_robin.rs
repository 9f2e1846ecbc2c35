//! Round-Robin ("LRU way") Replacement Policy.
//!
//! Each set keeps a single pointer to its next victim. Whenever a processor
//! access touches way `w`, the pointer moves to `w + 1` (wrapping). This is
//! the exact replacement rule of the modeled hardware. It only approximates
//! true LRU, and must not be replaced by a recency stack: hit/miss and
//! writeback counts depend on it.

use super::ReplacementPolicy;

/// Round-robin policy state.
#[derive(Clone, Debug)]
pub struct RoundRobinPolicy {
    /// Next victim way, one entry per set.
    next: Vec<usize>,
    ways: usize,
}

impl RoundRobinPolicy {
    /// Creates a policy with every set pointing at way 0.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            next: vec![0; sets],
            ways,
        }
    }

    /// Way the next fill in `set` will use, without touching the policy.
    pub fn next_victim(&self, set: usize) -> usize {
        self.next[set]
    }
}

impl ReplacementPolicy for RoundRobinPolicy {
    /// Points the set's victim at the way after `way`.
    ///
    /// Direct-mapped caches have nothing to track.
    fn update(&mut self, set: usize, way: usize) {
        if self.ways >= 2 {
            self.next[set] = (way + 1) % self.ways;
        }
    }

    fn get_victim(&mut self, set: usize) -> usize {
        self.next_victim(set)
    }
}
