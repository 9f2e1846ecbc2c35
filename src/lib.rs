//! Coherent Cache Simulator Library.
//!
//! This crate implements a functional simulator of set-associative caches
//! with pluggable coherence protocols (none, VI, MSI) and round-robin
//! replacement. Only metadata is modeled: tags, line states, dirty bits, and
//! access counts. There is no timing and no data.
//!
//! # Architecture
//!
//! * **Cache**: address decoding, set lookup, protocol state machines, and
//!   victim selection.
//! * **System**: private caches per core joined by a snooping bus.
//! * **Statistics**: hit/miss, writeback, and snoop counters with derived
//!   traffic figures.
//!
//! # Modules
//!
//! * `cache`: The single-cache access engine.
//! * `common`: Shared types, constants, and error handling.
//! * `config`: Configuration loading and parsing.
//! * `sim`: Trace input.
//! * `stats`: Statistics collection and reporting.
//! * `system`: Multi-core snooping system.

/// Set-associative cache with coherence metadata.
///
/// Decomposes addresses into tag/index/offset, looks blocks up in their set,
/// runs the selected coherence protocol, and selects victims round-robin.
pub mod cache;

/// Shared types, constants, and error handling.
pub mod common;

/// Configuration system for cache geometry, protocol, and run options.
///
/// Loads and parses TOML configuration files.
pub mod config;

/// Simulation inputs (memory reference traces).
pub mod sim;

/// Statistics collection and reporting.
pub mod stats;

/// Multi-core system of private caches sharing a snooping bus.
pub mod system;

pub use cache::{access, derived_rates, make_cache, snapshot_stats, Cache};
pub use common::{Action, ConfigError, TraceError};
pub use config::Protocol;
pub use stats::{CacheStats, DerivedRates};
