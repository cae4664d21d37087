//! The active pairwise vote: the two contestants and their tally.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::EntryId;

/// The state of the vote currently in progress.
///
/// Invariants (maintained by the transition functions in [`crate::state`]):
/// - `tally` keys are always members of `pair`.
/// - A zero count is represented by absence, never stored explicitly.
///
/// The tally is a `BTreeMap` rather than a `HashMap` so that serializing the
/// same state twice yields byte-identical output; the hosting application may
/// hash or diff persisted states and must not see spurious changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteState {
    /// The two entries currently being voted on, in promotion order.
    pub pair: [EntryId; 2],

    /// Votes received so far, keyed by pair member. Absence means zero.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tally: BTreeMap<EntryId, u32>,
}

impl VoteState {
    /// Creates a fresh vote over the given pair with an empty tally.
    pub fn new(pair: [EntryId; 2]) -> Self {
        VoteState {
            pair,
            tally: BTreeMap::new(),
        }
    }

    /// Returns true if `entry` is one of the two contestants.
    pub fn contains(&self, entry: &EntryId) -> bool {
        self.pair.iter().any(|p| p == entry)
    }

    /// Returns the vote count for `entry`, treating absence as zero.
    pub fn count(&self, entry: &EntryId) -> u32 {
        self.tally.get(entry).copied().unwrap_or(0)
    }

    /// Returns true if no votes have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.tally.is_empty()
    }
}
