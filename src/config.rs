use serde::{Deserialize, Serialize};
use std::fs;

use crate::common::ConfigError;

const DEFAULT_CAPACITY: u64 = 16 * 1024;
const DEFAULT_BLOCK_SIZE: u64 = 64;
const DEFAULT_ASSOCIATIVITY: u64 = 4;
const DEFAULT_CORES: usize = 1;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_accesses: bool,

    #[serde(default = "default_cores")]
    pub cores: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_accesses: false,
            cores: DEFAULT_CORES,
        }
    }
}

fn default_cores() -> usize {
    DEFAULT_CORES
}

/// Coherence protocol run by every cache in the system.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Valid/invalid lines that ignore bus traffic.
    #[default]
    None,
    /// Valid/invalid lines invalidated by any snoop hit.
    Vi,
    /// Modified/shared/invalid.
    Msi,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Protocol::None => "none",
            Protocol::Vi => "vi",
            Protocol::Msi => "msi",
        };
        f.pad(name)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "d_c_capacity")]
    pub capacity: u64,

    #[serde(default = "d_c_block")]
    pub block_size: u64,

    #[serde(default = "d_c_assoc")]
    pub associativity: u64,

    #[serde(default)]
    pub protocol: Protocol,

    #[serde(default)]
    pub lru_on_invalidate: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: d_c_capacity(),
            block_size: d_c_block(),
            associativity: d_c_assoc(),
            protocol: Protocol::default(),
            lru_on_invalidate: false,
        }
    }
}

fn d_c_capacity() -> u64 {
    DEFAULT_CAPACITY
}

fn d_c_block() -> u64 {
    DEFAULT_BLOCK_SIZE
}

fn d_c_assoc() -> u64 {
    DEFAULT_ASSOCIATIVITY
}
