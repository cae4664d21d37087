//! Round resolution: ranking the active pair by its tally.
//!
//! Pure helper for the transition logic. Deciding who won a round is kept
//! separate from deciding what happens next (rotation, termination), so each
//! piece can be tested on its own.

use crate::types::{EntryId, VoteState};

/// The result of ranking a pair by vote counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// One member had strictly more votes than the other.
    Decisive {
        /// The pair member with the higher count.
        winner: EntryId,
        /// The pair member with the lower count.
        loser: EntryId,
    },

    /// Both members had exactly equal counts (including 0-0). The members
    /// are reported in their original pair order.
    Tied { first: EntryId, second: EntryId },
}

/// Ranks the active pair by tally counts, treating absence as zero.
///
/// Strict majority wins; exact equality is a tie. The caller decides what a
/// tie means for rotation (both members are recycled to the back of the
/// pool rather than one being picked arbitrarily).
pub fn resolve_round(vote: &VoteState) -> RoundOutcome {
    let [first, second] = &vote.pair;
    let first_count = vote.count(first);
    let second_count = vote.count(second);

    if first_count > second_count {
        RoundOutcome::Decisive {
            winner: first.clone(),
            loser: second.clone(),
        }
    } else if second_count > first_count {
        RoundOutcome::Decisive {
            winner: second.clone(),
            loser: first.clone(),
        }
    } else {
        RoundOutcome::Tied {
            first: first.clone(),
            second: second.clone(),
        }
    }
}
