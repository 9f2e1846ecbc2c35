//! Coherence Protocols.
//!
//! A protocol decides how a line reacts to each request. The cache performs
//! the set lookup and victim selection once; the protocol only sees the line
//! that matched (`on_hit`) or the victim chosen for a processor miss
//! (`on_fill`).

use crate::common::Action;
use crate::config::Protocol;

use super::line::CacheLine;

/// Modified/shared/invalid protocol.
pub mod msi;

/// Valid/invalid protocol, with and without snoop invalidation.
pub mod vi;

pub use msi::Msi;
pub use vi::ValidInvalid;

/// Result of a single access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessOutcome {
    /// The request was satisfied by (or, for a snoop, found) a resident line.
    pub hit: bool,
    /// A dirty block was written back to memory.
    pub writeback: bool,
    /// A store found the block shared and had to request ownership.
    pub upgrade_miss: bool,
}

impl AccessOutcome {
    pub fn hit() -> Self {
        Self {
            hit: true,
            ..Self::default()
        }
    }

    pub fn miss() -> Self {
        Self::default()
    }
}

/// Per-line state machine of a coherence protocol.
pub trait CoherenceProtocol {
    /// Applies `action` to a line whose tag matched and whose state is valid.
    fn on_hit(&self, line: &mut CacheLine, action: Action) -> AccessOutcome;

    /// Installs block `tag` into `victim` after a processor miss.
    ///
    /// Only called for `Load` and `Store`.
    fn on_fill(&self, victim: &mut CacheLine, tag: u32, action: Action) -> AccessOutcome;
}

/// Builds the state machine for the configured protocol.
pub fn build(protocol: Protocol) -> Box<dyn CoherenceProtocol> {
    match protocol {
        Protocol::None => Box::new(ValidInvalid::new(false)),
        Protocol::Vi => Box::new(ValidInvalid::new(true)),
        Protocol::Msi => Box::new(Msi),
    }
}
