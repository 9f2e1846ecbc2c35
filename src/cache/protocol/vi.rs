//! Valid/Invalid Protocol.
//!
//! Lines are either `Valid` or `Invalid`. Processor loads and stores behave
//! identically with or without coherence. The two variants differ only in how
//! a valid line reacts to a snoop:
//!
//! * **None:** the snoop is counted as a hit and otherwise ignored.
//! * **VI:** the line supplies its data (writing back if dirty) and is
//!   invalidated, whether the remote access was a load or a store.

use super::{AccessOutcome, CoherenceProtocol};
use crate::cache::line::{CacheLine, LineState};
use crate::common::Action;

/// Valid/invalid state machine.
#[derive(Clone, Copy, Debug)]
pub struct ValidInvalid {
    snoop_invalidates: bool,
}

impl ValidInvalid {
    /// `snoop_invalidates` selects VI (`true`) over no protocol (`false`).
    pub fn new(snoop_invalidates: bool) -> Self {
        Self { snoop_invalidates }
    }
}

impl CoherenceProtocol for ValidInvalid {
    fn on_hit(&self, line: &mut CacheLine, action: Action) -> AccessOutcome {
        let mut outcome = AccessOutcome::hit();
        match action {
            Action::Load => {}
            Action::Store => line.dirty = true,
            Action::LoadMiss | Action::StoreMiss => {
                if self.snoop_invalidates {
                    outcome.writeback = line.dirty;
                    line.invalidate();
                }
            }
        }
        outcome
    }

    fn on_fill(&self, victim: &mut CacheLine, tag: u32, action: Action) -> AccessOutcome {
        let outcome = AccessOutcome {
            writeback: victim.state == LineState::Valid && victim.dirty,
            ..AccessOutcome::miss()
        };
        victim.tag = tag;
        victim.state = LineState::Valid;
        victim.dirty = action == Action::Store;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_line(dirty: bool) -> CacheLine {
        CacheLine {
            tag: 7,
            dirty,
            state: LineState::Valid,
        }
    }

    #[test]
    fn store_hit_sets_dirty() {
        let vi = ValidInvalid::new(true);
        let mut line = valid_line(false);
        assert_eq!(vi.on_hit(&mut line, Action::Store), AccessOutcome::hit());
        assert!(line.dirty);
        assert_eq!(line.state, LineState::Valid);
    }

    #[test]
    fn vi_snoop_writes_back_dirty_line() {
        let vi = ValidInvalid::new(true);
        let mut line = valid_line(true);
        let outcome = vi.on_hit(&mut line, Action::LoadMiss);
        assert!(outcome.hit);
        assert!(outcome.writeback);
        assert_eq!(line.state, LineState::Invalid);
        assert!(!line.dirty);
    }

    #[test]
    fn no_protocol_ignores_snoop() {
        let none = ValidInvalid::new(false);
        let mut line = valid_line(true);
        let outcome = none.on_hit(&mut line, Action::StoreMiss);
        assert_eq!(outcome, AccessOutcome::hit());
        assert_eq!(line, valid_line(true));
    }

    #[test]
    fn fill_over_dirty_victim_writes_back() {
        let vi = ValidInvalid::new(true);
        let mut line = valid_line(true);
        let outcome = vi.on_fill(&mut line, 9, Action::Load);
        assert!(!outcome.hit);
        assert!(outcome.writeback);
        assert_eq!(line.tag, 9);
        assert!(!line.dirty);
    }
}
