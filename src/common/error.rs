//! Error types.
//!
//! Construction and input failures are reported through these enums. Once a
//! cache has been built, accesses cannot fail.

use std::fmt;
use std::io;

/// Errors raised while building a cache or loading its configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A geometry parameter was zero.
    Zero(&'static str),

    /// A geometry parameter was not a power of two.
    NotPowerOfTwo { field: &'static str, value: u64 },

    /// Capacity does not hold a whole number of sets.
    Indivisible {
        capacity: u64,
        block_size: u64,
        associativity: u64,
    },

    /// Capacity exceeds what a 32-bit address can reach.
    CapacityTooLarge { capacity: u64 },

    /// The configuration file could not be read.
    Io { path: String, source: io::Error },

    /// The configuration file is not valid TOML for `Config`.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Zero(field) => write!(f, "{} must be non-zero", field),
            ConfigError::NotPowerOfTwo { field, value } => {
                write!(f, "{} must be a power of two (got {})", field, value)
            }
            ConfigError::Indivisible {
                capacity,
                block_size,
                associativity,
            } => write!(
                f,
                "capacity {} is not a multiple of associativity {} x block size {}",
                capacity, associativity, block_size
            ),
            ConfigError::CapacityTooLarge { capacity } => write!(
                f,
                "capacity {} exceeds the 32-bit address space",
                capacity
            ),
            ConfigError::Io { path, source } => {
                write!(f, "could not read config '{}': {}", path, source)
            }
            ConfigError::Parse(msg) => write!(f, "could not parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors raised while reading or replaying an access trace.
#[derive(Debug)]
pub enum TraceError {
    /// The trace file could not be read.
    Io { path: String, source: io::Error },

    /// A trace line is malformed. Line numbers are 1-based.
    Parse { line: usize, reason: String },

    /// A trace line names a core the system does not have.
    CoreOutOfRange {
        line: usize,
        core: usize,
        cores: usize,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Io { path, source } => {
                write!(f, "could not read trace '{}': {}", path, source)
            }
            TraceError::Parse { line, reason } => write!(f, "trace line {}: {}", line, reason),
            TraceError::CoreOutOfRange { line, core, cores } => write!(
                f,
                "trace line {}: core {} out of range (system has {} cores)",
                line, core, cores
            ),
        }
    }
}

impl std::error::Error for TraceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TraceError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
