//! The three tournament transitions: seeding, advancing, and voting.
//!
//! Pure functions from an immutable state value to a new state value. The
//! hosting application owns the single authoritative state and serializes
//! updates to it; nothing here blocks, mutates shared memory, or touches I/O.

use thiserror::Error;
use tracing::debug;

use super::resolution::{resolve_round, RoundOutcome};
use crate::types::{EntryId, Tournament, VoteState};

/// Error returned when a transition is invalid in the current state.
///
/// Every failure is local and recoverable: the caller rejects the triggering
/// event and keeps its previous state value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The tournament already concluded; no further transitions apply.
    #[error("tournament already finished, winner is '{winner}'")]
    TournamentOver { winner: EntryId },

    /// `advance` was called before the pool held enough candidates to pair.
    #[error("cannot start a round with {available} entries, need at least 2")]
    NotEnoughEntries { available: usize },

    /// `advance` was called on an active vote with no recorded votes.
    #[error("no votes recorded for '{first}' vs '{second}', nothing to resolve")]
    NothingToResolve { first: EntryId, second: EntryId },

    /// `cast_vote` named an entry outside the active pair.
    #[error("'{choice}' is not in the active pair ('{first}' vs '{second}')")]
    InvalidChoice {
        choice: EntryId,
        first: EntryId,
        second: EntryId,
    },
}

/// Appends candidates to the pool, preserving order.
///
/// Accepts any finite iterable of identifier-like values and normalizes it
/// into the canonical entry sequence. Duplicates are permitted and kept.
/// An active vote is left untouched.
///
/// Fails with [`TransitionError::TournamentOver`] on a finished tournament,
/// which has no pool to append to.
pub fn seed_entries<I>(state: &Tournament, new_entries: I) -> Result<Tournament, TransitionError>
where
    I: IntoIterator,
    I::Item: Into<EntryId>,
{
    let appended = |entries: &[EntryId]| -> Vec<EntryId> {
        let mut pool = entries.to_vec();
        pool.extend(new_entries.into_iter().map(Into::into));
        pool
    };

    match state {
        Tournament::Seeding { entries } => Ok(Tournament::Seeding {
            entries: appended(entries),
        }),
        Tournament::Voting { entries, vote } => Ok(Tournament::Voting {
            entries: appended(entries),
            vote: vote.clone(),
        }),
        Tournament::Finished { winner } => Err(TransitionError::TournamentOver {
            winner: winner.clone(),
        }),
    }
}

/// The central state-machine transition: resolves the active vote (if any)
/// and promotes the next pair, or declares the tournament winner.
///
/// - In `Seeding`, the first two pool entries become the opening pair.
/// - In `Voting`, the tally decides the round. A strict majority sends the
///   loser to the back of the pool and pairs the round winner against the
///   next pool entry; if the pool was empty, the round winner is the
///   tournament winner. A tie sends both members to the back of the pool in
///   pair order and promotes the first two pool entries instead, so every
///   tied entry gets another chance later.
///
/// The new pair always starts with an empty tally.
pub fn advance(state: &Tournament) -> Result<Tournament, TransitionError> {
    match state {
        Tournament::Seeding { entries } => {
            if entries.len() < 2 {
                return Err(TransitionError::NotEnoughEntries {
                    available: entries.len(),
                });
            }
            let mut pool = entries.clone();
            let first = pool.remove(0);
            let second = pool.remove(0);
            debug!(%first, %second, remaining = pool.len(), "opening pair promoted");
            Ok(Tournament::Voting {
                entries: pool,
                vote: VoteState::new([first, second]),
            })
        }

        Tournament::Voting { entries, vote } => {
            if vote.is_empty() {
                return Err(TransitionError::NothingToResolve {
                    first: vote.pair[0].clone(),
                    second: vote.pair[1].clone(),
                });
            }

            match resolve_round(vote) {
                RoundOutcome::Decisive { winner, loser } => {
                    // The finale: nobody left to challenge the round winner.
                    if entries.is_empty() {
                        debug!(%winner, "tournament winner declared");
                        return Ok(Tournament::Finished { winner });
                    }

                    let mut pool = entries.clone();
                    let challenger = pool.remove(0);
                    pool.push(loser);
                    debug!(%winner, %challenger, "round decided, winner carries forward");
                    Ok(Tournament::Voting {
                        entries: pool,
                        vote: VoteState::new([challenger, winner]),
                    })
                }

                RoundOutcome::Tied { first, second } => {
                    // Both members rejoin the pool, so it always has at
                    // least two entries to promote from.
                    let mut pool = entries.clone();
                    pool.push(first);
                    pool.push(second);
                    let next_first = pool.remove(0);
                    let next_second = pool.remove(0);
                    debug!(%next_first, %next_second, "round tied, both members recycled");
                    Ok(Tournament::Voting {
                        entries: pool,
                        vote: VoteState::new([next_first, next_second]),
                    })
                }
            }
        }

        Tournament::Finished { winner } => Err(TransitionError::TournamentOver {
            winner: winner.clone(),
        }),
    }
}

/// Records one vote for `choice` within the active pair's tally.
///
/// Operates on the [`VoteState`] alone; the hosting application extracts it
/// from the tournament and merges the result back. A count is created at 1
/// on the first vote, so absence always means zero.
///
/// Fails with [`TransitionError::InvalidChoice`] when `choice` is not a pair
/// member, preventing stray tally keys.
pub fn cast_vote(vote: &VoteState, choice: &EntryId) -> Result<VoteState, TransitionError> {
    if !vote.contains(choice) {
        return Err(TransitionError::InvalidChoice {
            choice: choice.clone(),
            first: vote.pair[0].clone(),
            second: vote.pair[1].clone(),
        });
    }

    let mut next = vote.clone();
    *next.tally.entry(choice.clone()).or_insert(0) += 1;
    Ok(next)
}
