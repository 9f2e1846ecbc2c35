//! Simulation inputs.

/// Text trace parsing.
pub mod trace;

pub use trace::{load_trace, parse_trace, TraceRecord};
