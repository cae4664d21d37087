//! Pure state logic for the voting tournament.
//!
//! This module contains the functional core: resolving a round from its
//! tally and computing the next tournament state. All I/O, transport, and
//! persistence are handled by the hosting application.

pub mod resolution;
pub mod transitions;

// Re-export commonly used types and functions
pub use resolution::{resolve_round, RoundOutcome};
pub use transitions::{advance, cast_vote, seed_entries, TransitionError};
