//! Test module organization.
//!
//! This module organizes all integration tests for the cache simulator.







/// Statistics counters and derived rates.
mod stats_tests;


/// Trace parsing.
mod trace_tests;
