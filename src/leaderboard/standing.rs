use crate::MATCH_WIN_POINTS;
use crate::Score;
use crate::Tally;
use crate::players::Name;
use serde::Serialize;

/// One player's cumulative record. `wins`, `losses`, and `ties` count matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: Name,
    pub score: Score,
    pub wins: Tally,
    pub losses: Tally,
    pub ties: Tally,
    pub played: Tally,
}

impl From<Name> for Standing {
    fn from(name: Name) -> Self {
        Self {
            name,
            score: 0,
            wins: 0,
            losses: 0,
            ties: 0,
            played: 0,
        }
    }
}

impl Standing {
    pub(super) fn win(&mut self) {
        self.score += MATCH_WIN_POINTS;
        self.wins += 1;
        self.played += 1;
    }
    pub(super) fn lose(&mut self) {
        self.losses += 1;
        self.played += 1;
    }
    pub(super) fn draw(&mut self) {
        self.ties += 1;
        self.played += 1;
    }
}
