use super::*;
use crate::MAX_ROUNDS;
use crate::Tally;
use crate::players::Name;
use serde::Serialize;

/// Client-facing snapshot of the match slot.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub phase: Phase,
    pub active: bool,
    pub round: Tally,
    pub max_rounds: Tally,
    pub p1: Option<Name>,
    pub p2: Option<Name>,
    pub p1_round_wins: Tally,
    pub p2_round_wins: Tally,
    pub winner: Option<Name>,
    pub overall_tie: bool,
    pub locked_winner_as_p1: bool,
    pub round_history: Vec<Round>,
}

impl From<Option<&Match>> for MatchSummary {
    fn from(game: Option<&Match>) -> Self {
        let phase = Phase::from(game);
        match game {
            None => Self {
                phase,
                active: false,
                round: 0,
                max_rounds: MAX_ROUNDS,
                p1: None,
                p2: None,
                p1_round_wins: 0,
                p2_round_wins: 0,
                winner: None,
                overall_tie: false,
                locked_winner_as_p1: false,
                round_history: Vec::new(),
            },
            Some(game) => Self {
                phase,
                active: phase == Phase::InProgress,
                round: game.round(),
                max_rounds: MAX_ROUNDS,
                p1: Some(game.p1().clone()),
                p2: Some(game.p2().clone()),
                p1_round_wins: game.p1_round_wins(),
                p2_round_wins: game.p2_round_wins(),
                winner: game.winner().cloned(),
                overall_tie: game.result() == Some(Outcome::Tie),
                locked_winner_as_p1: phase == Phase::Completed,
                round_history: game.history().to_vec(),
            },
        }
    }
}
