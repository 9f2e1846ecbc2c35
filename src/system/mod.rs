//! Multi-Core Cache System.
//!
//! One private cache per core, all sharing a snooping bus. A processor access
//! that does not hit in its own cache (including an MSI upgrade miss) is
//! broadcast to the other caches so they can supply, downgrade, or invalidate
//! their copies.

/// Snoop broadcast between caches.
pub mod bus;

pub use self::bus::Bus;

use crate::cache::Cache;
use crate::common::{Action, ConfigError, TraceError};
use crate::config::CacheConfig;
use crate::sim::TraceRecord;
use crate::stats::{CacheStats, CoreReport, SimReport};

/// Caches and bus of a simulated multiprocessor.
pub struct System {
    pub caches: Vec<Cache>,
    pub bus: Bus,
    config: CacheConfig,
}

impl System {
    /// Creates `cores` identical caches described by `config`.
    ///
    /// # Errors
    ///
    /// Fails if `cores` is zero or the cache geometry is invalid.
    pub fn new(cores: usize, config: &CacheConfig) -> Result<Self, ConfigError> {
        if cores == 0 {
            return Err(ConfigError::Zero("cores"));
        }
        let caches = (0..cores)
            .map(|_| Cache::from_config(config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            caches,
            bus: Bus::new(),
            config: config.clone(),
        })
    }

    /// Enables or disables per-access tracing on every cache.
    pub fn set_trace(&mut self, trace: bool) {
        for cache in &mut self.caches {
            cache.trace = trace;
        }
    }

    /// Applies a processor access from `core` and returns whether it hit.
    ///
    /// # Panics
    ///
    /// Panics if `core` is out of range. `run` checks this for trace input.
    pub fn access(&mut self, core: usize, addr: u32, action: Action) -> bool {
        let hit = self.caches[core].access(addr, action);
        if !hit {
            if let Some(snoop) = action.bus_request() {
                self.bus.broadcast(&mut self.caches, core, addr, snoop);
            }
        }
        hit
    }

    /// Applies every record of a trace in order.
    pub fn run(&mut self, records: &[TraceRecord]) -> Result<(), TraceError> {
        let cores = self.caches.len();
        for rec in records {
            if rec.core >= cores {
                return Err(TraceError::CoreOutOfRange {
                    line: rec.line,
                    core: rec.core,
                    cores,
                });
            }
            self.access(rec.core, rec.addr, rec.action);
        }
        Ok(())
    }

    /// Sum of the counters of all caches.
    pub fn total_stats(&self) -> CacheStats {
        let mut total = CacheStats::default();
        for cache in &self.caches {
            total.merge(&cache.stats());
        }
        total
    }

    /// Collects per-core statistics and bus counters.
    pub fn report(&self) -> SimReport {
        SimReport {
            config: self.config.clone(),
            cores: self
                .caches
                .iter()
                .enumerate()
                .map(|(core, cache)| CoreReport {
                    core,
                    stats: cache.stats(),
                    rates: cache.rates(),
                })
                .collect(),
            bus_reads: self.bus.reads,
            bus_read_exclusives: self.bus.read_exclusives,
        }
    }

    /// Prints the statistics of every cache followed by the bus counters.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("protocol                   {}", self.config.protocol);
        println!("capacity                   {} B", self.config.capacity);
        println!("block_size                 {} B", self.config.block_size);
        println!("associativity              {}", self.config.associativity);
        for (core, cache) in self.caches.iter().enumerate() {
            cache
                .stats()
                .print(&format!("CORE {}", core), self.config.block_size);
        }
        if self.caches.len() > 1 {
            self.total_stats().print("ALL CORES", self.config.block_size);
        }
        println!("----------------------------------------------------------");
        println!("BUS");
        println!("  bus_reads                  {}", self.bus.reads);
        println!("  bus_read_exclusives        {}", self.bus.read_exclusives);
        println!("==========================================================");
    }
}
