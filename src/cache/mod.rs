//! Set-Associative Cache.
//!
//! The `Cache` owns its geometry, a flat array of line metadata, the
//! replacement state, and the statistics. Each access is decoded, looked up
//! in its set, handed to the coherence protocol, and recorded, all before
//! `access` returns.

/// Address decomposition and geometry validation.
pub mod geometry;

/// Per-line metadata.
pub mod line;

/// Victim selection.
pub mod policies;

/// Coherence state machines.
pub mod protocol;

pub use geometry::CacheGeometry;
pub use line::{CacheLine, LineState};
pub use protocol::AccessOutcome;

use crate::common::{Action, ConfigError};
use crate::config::{CacheConfig, Protocol};
use crate::stats::{CacheStats, DerivedRates};
use policies::{ReplacementPolicy, RoundRobinPolicy};
use protocol::CoherenceProtocol;

/// A single private cache with coherence metadata.
pub struct Cache {
    geometry: CacheGeometry,
    /// Lines stored set-major: `lines[set * ways + way]`.
    lines: Vec<CacheLine>,
    policy: RoundRobinPolicy,
    protocol: Protocol,
    engine: Box<dyn CoherenceProtocol>,
    stats: CacheStats,
    lru_on_invalidate: bool,
    /// Emit one stderr line per access.
    pub trace: bool,
}

impl Cache {
    /// Creates an empty cache with every line invalid and clean.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Total capacity in bytes.
    /// * `block_size` - Line size in bytes.
    /// * `associativity` - Ways per set.
    /// * `protocol` - Coherence protocol run by this cache.
    /// * `lru_on_invalidate` - Stored for reporting. Replacement follows the
    ///   round-robin rule regardless.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the geometry is not a valid power-of-two
    /// layout (see [`CacheGeometry::new`]).
    pub fn new(
        capacity: u64,
        block_size: u64,
        associativity: u64,
        protocol: Protocol,
        lru_on_invalidate: bool,
    ) -> Result<Self, ConfigError> {
        let geometry = CacheGeometry::new(capacity, block_size, associativity)?;
        Ok(Self {
            lines: vec![CacheLine::default(); geometry.lines()],
            policy: RoundRobinPolicy::new(geometry.sets(), geometry.associativity()),
            geometry,
            protocol,
            engine: protocol::build(protocol),
            stats: CacheStats::default(),
            lru_on_invalidate,
            trace: cfg!(feature = "always-trace"),
        })
    }

    /// Creates a cache from a configuration section.
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.capacity,
            config.block_size,
            config.associativity,
            config.protocol,
            config.lru_on_invalidate,
        )
    }

    /// Applies one request and returns whether it hit.
    ///
    /// A store to a shared MSI line is an upgrade miss and returns `false`.
    pub fn access(&mut self, addr: u32, action: Action) -> bool {
        self.access_detailed(addr, action).hit
    }

    /// Applies one request and returns the full outcome.
    pub fn access_detailed(&mut self, addr: u32, action: Action) -> AccessOutcome {
        let set = self.geometry.index(addr);
        let tag = self.geometry.tag(addr);
        let ways = self.geometry.associativity();
        let base = set * ways;

        let resident = self.lines[base..base + ways]
            .iter()
            .position(|line| line.holds(tag));

        let (way, outcome) = match resident {
            Some(way) => {
                let outcome = self.engine.on_hit(&mut self.lines[base + way], action);
                if action.is_cpu() {
                    self.policy.update(set, way);
                }
                (Some(way), outcome)
            }
            None if action.is_cpu() => {
                let way = self.policy.get_victim(set);
                let outcome = self.engine.on_fill(&mut self.lines[base + way], tag, action);
                self.policy.update(set, way);
                (Some(way), outcome)
            }
            None => (None, AccessOutcome::miss()),
        };

        self.stats.record(action, outcome);

        if self.trace {
            eprintln!(
                "{:<8} addr={:#010x} set={} way={} hit={} wb={} upg={}",
                action,
                addr,
                set,
                way.map_or_else(|| "-".to_string(), |w| w.to_string()),
                outcome.hit,
                outcome.writeback,
                outcome.upgrade_miss
            );
        }

        outcome
    }

    pub fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn lru_on_invalidate(&self) -> bool {
        self.lru_on_invalidate
    }

    /// Returns the metadata of `way` in `set`.
    ///
    /// # Panics
    ///
    /// Panics if `set` or `way` is out of range.
    pub fn line(&self, set: usize, way: usize) -> &CacheLine {
        assert!(way < self.geometry.associativity(), "way {} out of range", way);
        &self.lines[set * self.geometry.associativity() + way]
    }

    /// Returns the line currently holding the block of `addr`, if any.
    pub fn lookup(&self, addr: u32) -> Option<&CacheLine> {
        let ways = self.geometry.associativity();
        let base = self.geometry.index(addr) * ways;
        let tag = self.geometry.tag(addr);
        self.lines[base..base + ways]
            .iter()
            .find(|line| line.holds(tag))
    }

    /// Way the next processor miss in `set` will fill.
    pub fn victim_way(&self, set: usize) -> usize {
        self.policy.next_victim(set)
    }

    /// Returns a copy of the raw counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Computes hit rate and traffic figures from the current counters.
    pub fn rates(&self) -> DerivedRates {
        self.stats.rates(self.geometry.block_size())
    }
}

/// Builds a cache. See [`Cache::new`].
pub fn make_cache(
    capacity: u64,
    block_size: u64,
    associativity: u64,
    protocol: Protocol,
    lru_on_invalidate: bool,
) -> Result<Cache, ConfigError> {
    Cache::new(capacity, block_size, associativity, protocol, lru_on_invalidate)
}

/// Applies one request to `cache`. See [`Cache::access`].
pub fn access(cache: &mut Cache, addr: u32, action: Action) -> bool {
    cache.access(addr, action)
}

/// Returns the raw counters of `cache`.
pub fn snapshot_stats(cache: &Cache) -> CacheStats {
    cache.stats()
}

/// Returns the derived rates of `cache`.
pub fn derived_rates(cache: &Cache) -> DerivedRates {
    cache.rates()
}
