/// Client-input failures. Each one is raised before any state is touched,
/// so a rejected request leaves the match and leaderboard as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid player name: {0}")]
    InvalidPlayerName(&'static str),
    #[error("invalid move {0:?}: moves must be rock, paper, or scissors")]
    InvalidMove(String),
    #[error("no active match; start one first")]
    NoActiveMatch,
    #[error("match already finished; start the next match")]
    MatchAlreadyComplete,
}

impl Error {
    /// Stable machine-readable tag for the JSON error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPlayerName(_) => "InvalidPlayerName",
            Self::InvalidMove(_) => "InvalidMove",
            Self::NoActiveMatch => "NoActiveMatch",
            Self::MatchAlreadyComplete => "MatchAlreadyComplete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            Error::InvalidPlayerName("empty").kind(),
            Error::InvalidMove("lizard".into()).kind(),
            Error::NoActiveMatch.kind(),
            Error::MatchAlreadyComplete.kind(),
        ];
        let unique = kinds.iter().collect::<std::collections::BTreeSet<_>>();
        assert_eq!(unique.len(), kinds.len());
    }

    #[test]
    fn move_message_names_input() {
        let msg = Error::InvalidMove("lizard".into()).to_string();
        assert!(msg.contains("\"lizard\""));
    }
}
