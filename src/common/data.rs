//! Cache Access Actions.
//!
//! This module defines the classification of requests a cache can receive.
//! Two of them originate from the local processor; the other two are snoops
//! observed on the shared bus when some other cache missed on a block.

use std::fmt;

/// Type of request presented to a cache.
///
/// Used by the coherence protocols to pick a state transition and by the
/// statistics collector to decide which counters an access touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Processor read.
    Load,

    /// Processor write.
    ///
    /// Marks the line dirty when it resolves to a resident block.
    Store,

    /// Bus snoop: another cache missed on a read of this block.
    LoadMiss,

    /// Bus snoop: another cache missed on (or upgraded for) a write of this
    /// block and requires exclusive ownership.
    StoreMiss,
}

impl Action {
    /// Returns `true` for requests issued by the local processor.
    pub fn is_cpu(self) -> bool {
        matches!(self, Action::Load | Action::Store)
    }

    /// Returns `true` for requests observed on the bus.
    pub fn is_snoop(self) -> bool {
        matches!(self, Action::LoadMiss | Action::StoreMiss)
    }

    /// The snoop other caches observe when this processor request misses.
    ///
    /// Returns `None` for actions that are already snoops.
    pub fn bus_request(self) -> Option<Action> {
        match self {
            Action::Load => Some(Action::LoadMiss),
            Action::Store => Some(Action::StoreMiss),
            Action::LoadMiss | Action::StoreMiss => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Load => "LOAD",
            Action::Store => "STORE",
            Action::LoadMiss => "LD_MISS",
            Action::StoreMiss => "ST_MISS",
        };
        f.pad(name)
    }
}
