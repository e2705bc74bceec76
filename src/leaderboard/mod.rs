//! Cumulative standings across every completed match.
//!
//! - [`Standing`] — one player's row
//! - [`Leaderboard`] — name-keyed store, listed by name or ranked by score
mod leaderboard;
mod standing;

pub use leaderboard::*;
pub use standing::*;
