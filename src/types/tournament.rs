//! The tournament lifecycle as a tagged union.
//!
//! Exactly one of "no vote yet", "vote in progress", or "winner declared" is
//! true at any time, so the state is an enum rather than a record with
//! optional fields. That makes the vote/winner mutual exclusivity a
//! type-level invariant instead of a runtime convention.

use serde::{Deserialize, Serialize};

use super::ids::EntryId;
use super::vote::VoteState;

/// The full state of a pairwise elimination tournament.
///
/// Transitions between phases happen only through the pure functions in
/// [`crate::state::transitions`]; every transition consumes a reference and
/// returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Tournament {
    /// Entries have been (or are being) seeded; no vote has started.
    Seeding {
        /// Candidates in future pairing order.
        entries: Vec<EntryId>,
    },

    /// A pairwise vote is in progress.
    Voting {
        /// Candidates waiting in rotation order. Never contains either
        /// member of the active pair.
        entries: Vec<EntryId>,
        /// The active pair and its tally.
        vote: VoteState,
    },

    /// The tournament has concluded. Terminal: no further transitions apply.
    Finished {
        /// The single entry that survived every round.
        winner: EntryId,
    },
}

impl Tournament {
    /// Creates an empty tournament, ready for seeding.
    pub fn new() -> Self {
        Tournament::Seeding { entries: vec![] }
    }

    /// Returns the candidates waiting outside the active pair, if any phase
    /// tracks them.
    pub fn entries(&self) -> Option<&[EntryId]> {
        match self {
            Tournament::Seeding { entries } | Tournament::Voting { entries, .. } => Some(entries),
            Tournament::Finished { .. } => None,
        }
    }

    /// Returns the active vote, if one is in progress.
    pub fn vote(&self) -> Option<&VoteState> {
        match self {
            Tournament::Voting { vote, .. } => Some(vote),
            _ => None,
        }
    }

    /// Returns the tournament winner, if the tournament has concluded.
    pub fn winner(&self) -> Option<&EntryId> {
        match self {
            Tournament::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns true if the tournament has concluded.
    pub fn is_finished(&self) -> bool {
        matches!(self, Tournament::Finished { .. })
    }

    /// Returns the phase name for error messages and logging.
    pub fn phase_name(&self) -> &'static str {
        match self {
            Tournament::Seeding { .. } => "seeding",
            Tournament::Voting { .. } => "voting",
            Tournament::Finished { .. } => "finished",
        }
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Tournament::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_entry() -> impl Strategy<Value = EntryId> {
        "[a-zA-Z0-9 ]{1,20}".prop_map(EntryId::new)
    }

    fn arb_tournament() -> impl Strategy<Value = Tournament> {
        prop_oneof![
            prop::collection::vec(arb_entry(), 0..6)
                .prop_map(|entries| Tournament::Seeding { entries }),
            (
                prop::collection::vec(arb_entry(), 0..6),
                arb_entry(),
                arb_entry(),
                0u32..10,
                0u32..10,
            )
                .prop_map(|(entries, a, b, votes_a, votes_b)| {
                    let mut vote = VoteState::new([a.clone(), b.clone()]);
                    if votes_a > 0 {
                        vote.tally.insert(a, votes_a);
                    }
                    if votes_b > 0 {
                        vote.tally.insert(b, votes_b);
                    }
                    Tournament::Voting { entries, vote }
                }),
            arb_entry().prop_map(|winner| Tournament::Finished { winner }),
        ]
    }

    proptest! {
        #[test]
        fn serde_roundtrip(state in arb_tournament()) {
            let json = serde_json::to_string(&state).unwrap();
            let parsed: Tournament = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(state, parsed);
        }
    }

    #[test]
    fn phase_accessors_are_disjoint() {
        let seeding = Tournament::new();
        assert!(seeding.entries().is_some());
        assert!(seeding.vote().is_none());
        assert!(seeding.winner().is_none());
        assert!(!seeding.is_finished());

        let finished = Tournament::Finished {
            winner: EntryId::from("A"),
        };
        assert!(finished.entries().is_none());
        assert!(finished.vote().is_none());
        assert_eq!(finished.winner(), Some(&EntryId::from("A")));
        assert!(finished.is_finished());
    }

    #[test]
    fn json_shape_is_tagged_by_phase() {
        let state = Tournament::Finished {
            winner: EntryId::from("Trainspotting"),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "phase": "finished", "winner": "Trainspotting" })
        );
    }
}
