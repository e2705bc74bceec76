//! Rock-paper-scissors rules and the single-match state machine.
//!
//! A [`Match`] runs [`crate::MAX_ROUNDS`] rounds between two named players.
//! Each round compares two [`Move`]s into an [`Outcome`] and is recorded as a
//! [`Round`]. The lifecycle is tracked by [`Phase`]; [`MatchSummary`] is the
//! serializable snapshot handed to clients.
mod contest;
mod moves;
mod outcome;
mod phase;
mod round;
mod summary;

pub use contest::*;
pub use moves::*;
pub use outcome::*;
pub use phase::*;
pub use round::*;
pub use summary::*;
