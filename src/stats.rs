//! Cache statistics collection and reporting.
//!
//! Tracks processor accesses, hits, writebacks, upgrade misses, and bus
//! snoops for one cache, and derives hit rate and bus traffic on demand.

use serde::Serialize;

use crate::cache::AccessOutcome;
use crate::common::Action;

/// Raw access counters for one cache.
///
/// Every field only ever grows. Counters are updated once per access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub cpu_accesses: u64,
    pub hits: u64,
    pub stores: u64,
    pub writebacks: u64,
    pub upgrade_misses: u64,
    pub bus_snoops: u64,
    pub snoop_hits: u64,
}

/// Rates and byte counts computed from `CacheStats`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DerivedRates {
    /// `hits / cpu_accesses`. NaN when there were no processor accesses.
    pub hit_rate: f64,
    /// `1 - hit_rate`. NaN when there were no processor accesses.
    pub miss_rate: f64,
    /// Blocks fetched from the bus, in bytes. Upgrade misses move no data.
    pub bytes_bus_to_cache: u64,
    /// Dirty blocks written back, in bytes.
    pub bytes_cache_to_bus_wb: u64,
    /// Sum of both directions for a write-back cache.
    pub total_traffic_wb: u64,
}

impl CacheStats {
    /// Accounts for one access and its outcome.
    pub fn record(&mut self, action: Action, outcome: AccessOutcome) {
        if action.is_cpu() {
            self.cpu_accesses += 1;
            if outcome.hit {
                self.hits += 1;
            }
        }
        if action == Action::Store {
            self.stores += 1;
        }
        if outcome.writeback {
            self.writebacks += 1;
        }
        if outcome.upgrade_miss {
            self.upgrade_misses += 1;
        }
        if action.is_snoop() {
            self.bus_snoops += 1;
            if outcome.hit {
                self.snoop_hits += 1;
            }
        }
    }

    /// Processor accesses that did not hit, upgrade misses included.
    pub fn misses(&self) -> u64 {
        self.cpu_accesses - self.hits
    }

    /// Derives rates and traffic for a cache with `block_size`-byte lines.
    ///
    /// With zero processor accesses the rates are NaN; the byte counts are
    /// still well defined.
    pub fn rates(&self, block_size: u64) -> DerivedRates {
        let hit_rate = self.hits as f64 / self.cpu_accesses as f64;
        let bytes_bus_to_cache = (self.cpu_accesses - self.hits - self.upgrade_misses) * block_size;
        let bytes_cache_to_bus_wb = self.writebacks * block_size;
        DerivedRates {
            hit_rate,
            miss_rate: 1.0 - hit_rate,
            bytes_bus_to_cache,
            bytes_cache_to_bus_wb,
            total_traffic_wb: bytes_bus_to_cache + bytes_cache_to_bus_wb,
        }
    }

    /// Adds another cache's counters into this one.
    pub fn merge(&mut self, other: &CacheStats) {
        self.cpu_accesses += other.cpu_accesses;
        self.hits += other.hits;
        self.stores += other.stores;
        self.writebacks += other.writebacks;
        self.upgrade_misses += other.upgrade_misses;
        self.bus_snoops += other.bus_snoops;
        self.snoop_hits += other.snoop_hits;
    }

    /// Prints a formatted summary of the counters and derived figures.
    ///
    /// Each metric is printed on its own `  key value` line so that result
    /// files can be scraped by key.
    pub fn print(&self, name: &str, block_size: u64) {
        let r = self.rates(block_size);
        println!("----------------------------------------------------------");
        println!("{}", name);
        println!("  n_cpu_accesses             {}", self.cpu_accesses);
        println!("  n_hits                     {}", self.hits);
        println!("  n_stores                   {}", self.stores);
        println!("  n_writebacks               {}", self.writebacks);
        println!("  n_upgrade_miss             {}", self.upgrade_misses);
        println!("  n_bus_snoops               {}", self.bus_snoops);
        println!("  n_snoop_hits               {}", self.snoop_hits);
        println!("  hit_rate                   {:.2}", r.hit_rate * 100.0);
        println!("  miss_rate                  {:.2}", r.miss_rate * 100.0);
        println!("  B_bus_to_cache             {}", r.bytes_bus_to_cache);
        println!("  B_written_cache_to_bus_wb  {}", r.bytes_cache_to_bus_wb);
        println!("  B_total_traffic_wb         {}", r.total_traffic_wb);
    }
}

/// Per-cache entry of a `SimReport`.
#[derive(Debug, Serialize)]
pub struct CoreReport {
    pub core: usize,
    pub stats: CacheStats,
    pub rates: DerivedRates,
}

/// Everything a finished simulation reports, ready for JSON output.
#[derive(Debug, Serialize)]
pub struct SimReport {
    pub config: crate::config::CacheConfig,
    pub cores: Vec<CoreReport>,
    pub bus_reads: u64,
    pub bus_read_exclusives: u64,
}
