//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the request classification, error types, and
//! address-width constants shared by the cache, the snooping system, and the
//! trace reader.

/// Common constants used throughout the simulator.
pub mod constants;

/// Cache request type definitions.
pub mod data;

/// Error types for configuration and trace handling.
pub mod error;

pub use constants::{ADDR_BITS, ADDR_MASK};
pub use data::Action;
pub use error::{ConfigError, TraceError};
