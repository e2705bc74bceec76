use super::*;
use serde::Serialize;

/// Result of one round, or of a whole match, from the seating's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Outcome {
    P1,
    P2,
    Tie,
}

impl Outcome {
    /// Same result with the seats swapped.
    pub fn flip(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
            Self::Tie => Self::Tie,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((p1, p2): (Move, Move)) -> Self {
        if p1 == p2 {
            Self::Tie
        } else if p1.beats() == p2 {
            Self::P1
        } else {
            Self::P2
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
