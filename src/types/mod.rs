//! Core domain types for the voting tournament.
//!
//! This module contains all the fundamental types used throughout the crate,
//! designed to encode invariants via the type system.

pub mod ids;
pub mod tournament;
pub mod vote;

// Re-export commonly used types at the module level
pub use ids::EntryId;
pub use tournament::Tournament;
pub use vote::VoteState;
