use super::*;
use serde::Serialize;

/// Match lifecycle.
/// `Completed` is transient: the next start moves back to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

impl From<Option<&Match>> for Phase {
    fn from(game: Option<&Match>) -> Self {
        match game {
            None => Self::NotStarted,
            Some(game) if game.is_complete() => Self::Completed,
            Some(_) => Self::InProgress,
        }
    }
}
