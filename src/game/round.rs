use super::*;
use crate::Tally;
use crate::players::Name;
use serde::Serialize;

/// One entry of a match's round history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub round: Tally,
    pub p1_move: Move,
    pub p2_move: Move,
    pub outcome: Outcome,
    pub round_winner: Option<Name>,
}

/// What a caller learns from playing one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    #[serde(flatten)]
    pub round: Round,
    pub rounds_played: Tally,
    pub completed: bool,
    pub match_outcome: Option<Outcome>,
    pub match_winner: Option<Name>,
}
