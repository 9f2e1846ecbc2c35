//! Cache line metadata.

use serde::Serialize;

/// Coherence state of a single line.
///
/// `None` and `VI` caches use `Invalid`/`Valid`; MSI caches use
/// `Invalid`/`Shared`/`Modified`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum LineState {
    #[default]
    Invalid,
    Valid,
    Shared,
    Modified,
}

impl LineState {
    pub fn is_valid(self) -> bool {
        self != LineState::Invalid
    }
}

/// Tag, dirty bit, and state of one (set, way) slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CacheLine {
    pub tag: u32,
    pub dirty: bool,
    pub state: LineState,
}

impl CacheLine {
    /// Returns `true` when the line holds a live copy of block `tag`.
    pub fn holds(&self, tag: u32) -> bool {
        self.state.is_valid() && self.tag == tag
    }

    /// Drops the line's copy of its block.
    pub fn invalidate(&mut self) {
        self.state = LineState::Invalid;
        self.dirty = false;
    }
}
