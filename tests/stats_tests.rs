//! Integration tests for statistics collection.

use coherence_cache_sim::cache::{AccessOutcome, Cache};
use coherence_cache_sim::common::Action;
use coherence_cache_sim::config::Protocol;
use coherence_cache_sim::derived_rates;
use coherence_cache_sim::stats::CacheStats;

fn outcome(hit: bool, writeback: bool, upgrade_miss: bool) -> AccessOutcome {
    AccessOutcome {
        hit,
        writeback,
        upgrade_miss,
    }
}

/// Tests counters touched by processor accesses.
#[test]
fn test_record_cpu_actions() {
    let mut stats = CacheStats::default();

    stats.record(Action::Load, outcome(true, false, false));
    stats.record(Action::Store, outcome(false, true, false));
    stats.record(Action::Store, outcome(false, false, true));

    assert_eq!(stats.cpu_accesses, 3);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.stores, 2);
    assert_eq!(stats.writebacks, 1);
    assert_eq!(stats.upgrade_misses, 1);
    assert_eq!(stats.bus_snoops, 0);
    assert_eq!(stats.snoop_hits, 0);
}

/// Tests counters touched by snoops.
#[test]
fn test_record_snoop_actions() {
    let mut stats = CacheStats::default();

    stats.record(Action::LoadMiss, outcome(true, true, false));
    stats.record(Action::StoreMiss, outcome(false, false, false));

    assert_eq!(stats.cpu_accesses, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.stores, 0);
    assert_eq!(stats.bus_snoops, 2);
    assert_eq!(stats.snoop_hits, 1);
    assert_eq!(stats.writebacks, 1);
}

/// Tests that the hit rate is exactly hits over accesses.
#[test]
fn test_hit_rate_exact() {
    let mut cache = Cache::new(1024, 16, 2, Protocol::Vi, false).unwrap();

    let addrs = [0x00u32, 0x04, 0x10, 0x00, 0x400, 0x800, 0x10, 0x14, 0x2000];
    let mut hits = 0u64;
    for &addr in &addrs {
        if cache.access(addr, Action::Load) {
            hits += 1;
        }
    }

    let stats = cache.stats();
    assert_eq!(stats.cpu_accesses, addrs.len() as u64);
    assert_eq!(stats.hits, hits);
    assert_eq!(cache.rates().hit_rate, hits as f64 / addrs.len() as f64);
}

/// Tests that the hit rate of an unused cache is NaN rather than a panic.
#[test]
fn test_hit_rate_without_accesses() {
    let cache = Cache::new(1024, 16, 2, Protocol::Msi, false).unwrap();

    let rates = derived_rates(&cache);
    assert!(rates.hit_rate.is_nan());
    assert!(rates.miss_rate.is_nan());
    assert_eq!(rates.bytes_bus_to_cache, 0);
    assert_eq!(rates.total_traffic_wb, 0);
}

/// Tests the traffic formulas.
#[test]
fn test_traffic_figures() {
    let stats = CacheStats {
        cpu_accesses: 100,
        hits: 70,
        stores: 40,
        writebacks: 12,
        upgrade_misses: 5,
        bus_snoops: 0,
        snoop_hits: 0,
    };

    let rates = stats.rates(64);
    assert_eq!(rates.hit_rate, 0.7);
    assert_eq!(rates.bytes_bus_to_cache, 25 * 64);
    assert_eq!(rates.bytes_cache_to_bus_wb, 12 * 64);
    assert_eq!(rates.total_traffic_wb, 37 * 64);
}

/// Tests that counters never decrease over a mixed workload.
#[test]
fn test_counters_monotonic() {
    let mut cache = Cache::new(256, 16, 2, Protocol::Msi, false).unwrap();
    let mut prev = cache.stats();

    for i in 0..200u32 {
        let addr = (i * 0x34) & 0x3ff;
        let action = match i % 4 {
            0 => Action::Load,
            1 => Action::Store,
            2 => Action::LoadMiss,
            _ => Action::StoreMiss,
        };
        cache.access(addr, action);
        let now = cache.stats();
        assert!(now.cpu_accesses >= prev.cpu_accesses);
        assert!(now.hits >= prev.hits);
        assert!(now.writebacks >= prev.writebacks);
        assert!(now.bus_snoops >= prev.bus_snoops);
        assert!(now.hits + now.upgrade_misses <= now.cpu_accesses);
        prev = now;
    }
    assert_eq!(prev.cpu_accesses, 100);
    assert_eq!(prev.bus_snoops, 100);
    assert_eq!(prev.stores, 50);
}
