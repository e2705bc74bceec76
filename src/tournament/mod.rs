//! Application state: one match slot and one leaderboard.
//!
//! Every request operates on a [`Tournament`] by reference, so the
//! single-instance semantics live in whoever owns it rather than in globals.
mod tournament;

pub use tournament::*;
