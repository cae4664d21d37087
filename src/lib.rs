//! Faceoff - the pure state-transition core of a pairwise elimination
//! voting tournament ("movie night" voting).
//!
//! Given a pool of candidate entries, the hosting application repeatedly
//! presents two of them as a pair, collects votes, and calls [`advance`] to
//! resolve the round and promote the next pair, until a single entry
//! remains and is declared the winner.
//!
//! The crate exposes exactly three transitions over one state value:
//!
//! - [`seed_entries`] appends candidates to the pool.
//! - [`advance`] resolves the active vote (if any) and promotes the next
//!   pair, or declares the tournament winner.
//! - [`cast_vote`] records one vote inside the pair-scoped tally.
//!
//! All three are deterministic pure functions: they take the current state
//! by reference and return a new value, never mutating their input. The
//! hosting application owns the single authoritative state, serializes
//! updates to it, and handles everything else (transport, persistence, UI).
//!
//! ```
//! use faceoff::{advance, cast_vote, seed_entries, Tournament};
//!
//! # fn main() -> Result<(), faceoff::TransitionError> {
//! let state = seed_entries(&Tournament::new(), ["Trainspotting", "28 Days Later"])?;
//! let state = advance(&state)?;
//!
//! let mut vote = state.vote().unwrap().clone();
//! vote = cast_vote(&vote, &"Trainspotting".into())?;
//! let state = Tournament::Voting {
//!     entries: state.entries().unwrap().to_vec(),
//!     vote,
//! };
//!
//! let state = advance(&state)?;
//! assert_eq!(state.winner().map(|w| w.as_str()), Some("Trainspotting"));
//! # Ok(())
//! # }
//! ```

pub mod state;
pub mod types;

pub use state::{advance, cast_vote, seed_entries, RoundOutcome, TransitionError};
pub use types::{EntryId, Tournament, VoteState};
