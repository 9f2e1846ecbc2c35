//! Snooping Bus.
//!
//! Carries miss notifications from one cache to all of its peers. The bus
//! has no timing or arbitration: a broadcast is delivered to every other
//! cache, in core order, before the requesting access is considered done.

use crate::cache::Cache;
use crate::common::Action;

/// Shared bus connecting the private caches.
#[derive(Debug, Default)]
pub struct Bus {
    /// Read requests broadcast (`LoadMiss`).
    pub reads: u64,
    /// Read-for-ownership requests broadcast (`StoreMiss`).
    pub read_exclusives: u64,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `snoop` for `addr` to every cache except `requester`.
    ///
    /// # Arguments
    ///
    /// * `caches` - All caches attached to the bus.
    /// * `requester` - Index of the cache that issued the request.
    /// * `addr` - Address of the missing block.
    /// * `snoop` - `LoadMiss` or `StoreMiss`.
    ///
    /// # Returns
    ///
    /// The number of peers that held the block.
    pub fn broadcast(
        &mut self,
        caches: &mut [Cache],
        requester: usize,
        addr: u32,
        snoop: Action,
    ) -> usize {
        match snoop {
            Action::LoadMiss => self.reads += 1,
            Action::StoreMiss => self.read_exclusives += 1,
            Action::Load | Action::Store => return 0,
        }

        caches
            .iter_mut()
            .enumerate()
            .filter(|(core, _)| *core != requester)
            .map(|(_, cache)| cache.access(addr, snoop))
            .filter(|&hit| hit)
            .count()
    }
}
