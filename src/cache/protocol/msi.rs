//! MSI Protocol.
//!
//! | state    | Load        | Store                     | LoadMiss (snoop)     | StoreMiss (snoop)     |
//! |----------|-------------|---------------------------|----------------------|-----------------------|
//! | Modified | hit         | hit                       | -> Shared, writeback | -> Invalid, writeback |
//! | Shared   | hit         | -> Modified, upgrade miss | hit                  | -> Invalid            |
//! | Invalid  | fill Shared | fill Modified             | no-op                | no-op                 |

use super::{AccessOutcome, CoherenceProtocol};
use crate::cache::line::{CacheLine, LineState};
use crate::common::Action;

/// MSI state machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Msi;

impl Msi {
    fn on_modified(line: &mut CacheLine, action: Action) -> AccessOutcome {
        let mut outcome = AccessOutcome::hit();
        match action {
            Action::StoreMiss => {
                line.invalidate();
                outcome.writeback = true;
            }
            Action::LoadMiss => {
                line.state = LineState::Shared;
                line.dirty = false;
                outcome.writeback = true;
            }
            Action::Load | Action::Store => {}
        }
        outcome
    }

    fn on_shared(line: &mut CacheLine, action: Action) -> AccessOutcome {
        match action {
            Action::StoreMiss => {
                line.invalidate();
                AccessOutcome::hit()
            }
            Action::Store => {
                line.state = LineState::Modified;
                line.dirty = true;
                AccessOutcome {
                    upgrade_miss: true,
                    ..AccessOutcome::miss()
                }
            }
            Action::Load | Action::LoadMiss => AccessOutcome::hit(),
        }
    }
}

impl CoherenceProtocol for Msi {
    fn on_hit(&self, line: &mut CacheLine, action: Action) -> AccessOutcome {
        match line.state {
            LineState::Modified => Self::on_modified(line, action),
            LineState::Shared => Self::on_shared(line, action),
            // Only reachable if a VI line ended up in an MSI cache.
            LineState::Valid | LineState::Invalid => AccessOutcome::miss(),
        }
    }

    fn on_fill(&self, victim: &mut CacheLine, tag: u32, action: Action) -> AccessOutcome {
        let outcome = AccessOutcome {
            writeback: victim.state.is_valid() && victim.dirty,
            ..AccessOutcome::miss()
        };
        victim.tag = tag;
        if action == Action::Store {
            victim.state = LineState::Modified;
            victim.dirty = true;
        } else {
            victim.state = LineState::Shared;
            victim.dirty = false;
        }
        outcome
    }
}
