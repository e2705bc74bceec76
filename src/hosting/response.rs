use crate::Error;
use crate::game::MatchSummary;
use crate::game::RoundResult;
use crate::leaderboard::Standing;
use serde::Serialize;

#[derive(Serialize)]
pub struct StateResponse {
    pub ok: bool,
    pub state: MatchSummary,
}

#[derive(Serialize)]
pub struct RoundResponse {
    pub ok: bool,
    pub round: RoundResult,
    pub state: MatchSummary,
    /// Present only on the round that completes the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<Vec<Standing>>,
}

#[derive(Serialize)]
pub struct PlayerResponse {
    pub ok: bool,
    pub player: Standing,
}

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub ok: bool,
    pub leaderboard: Vec<Standing>,
    pub ranking: Vec<Standing>,
    pub scoring: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
    pub kind: &'static str,
}

impl From<&Error> for ErrorResponse {
    fn from(e: &Error) -> Self {
        Self {
            ok: false,
            error: e.to_string(),
            kind: e.kind(),
        }
    }
}
