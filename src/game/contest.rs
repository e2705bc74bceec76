use super::*;
use crate::Error;
use crate::MAX_ROUNDS;
use crate::Tally;
use crate::players::Name;

/// A single ten-round contest between two named players.
///
/// The completion flag is derived: a match is complete exactly when
/// `round == MAX_ROUNDS`, and `play` refuses to advance past that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    p1: Name,
    p2: Name,
    round: Tally,
    p1_round_wins: Tally,
    p2_round_wins: Tally,
    history: Vec<Round>,
}

impl Match {
    pub fn new(p1: Name, p2: Name) -> Self {
        Self {
            p1,
            p2,
            round: 0,
            p1_round_wins: 0,
            p2_round_wins: 0,
            history: Vec::with_capacity(MAX_ROUNDS as usize),
        }
    }

    pub fn p1(&self) -> &Name {
        &self.p1
    }
    pub fn p2(&self) -> &Name {
        &self.p2
    }
    pub fn round(&self) -> Tally {
        self.round
    }
    pub fn p1_round_wins(&self) -> Tally {
        self.p1_round_wins
    }
    pub fn p2_round_wins(&self) -> Tally {
        self.p2_round_wins
    }
    pub fn history(&self) -> &[Round] {
        &self.history
    }
    pub fn is_complete(&self) -> bool {
        self.round >= MAX_ROUNDS
    }

    /// Apply one round. Fails without mutating if the match is already over.
    pub fn play(&mut self, p1_move: Move, p2_move: Move) -> Result<Round, Error> {
        if self.is_complete() {
            return Err(Error::MatchAlreadyComplete);
        }
        let outcome = p1_move.versus(p2_move);
        match outcome {
            Outcome::P1 => self.p1_round_wins += 1,
            Outcome::P2 => self.p2_round_wins += 1,
            Outcome::Tie => {}
        }
        self.round += 1;
        let round = Round {
            round: self.round,
            p1_move,
            p2_move,
            outcome,
            round_winner: self.seat(outcome).cloned(),
        };
        self.history.push(round.clone());
        log::debug!(
            "round {}/{}: {} {} vs {} {} -> {}",
            self.round,
            MAX_ROUNDS,
            self.p1,
            p1_move,
            self.p2,
            p2_move,
            outcome
        );
        Ok(round)
    }

    /// Match-level outcome, available once every round is played.
    pub fn result(&self) -> Option<Outcome> {
        self.is_complete().then(|| {
            match self.p1_round_wins.cmp(&self.p2_round_wins) {
                std::cmp::Ordering::Greater => Outcome::P1,
                std::cmp::Ordering::Less => Outcome::P2,
                std::cmp::Ordering::Equal => Outcome::Tie,
            }
        })
    }
    pub fn winner(&self) -> Option<&Name> {
        self.result().and_then(|o| self.seat(o))
    }
    pub fn loser(&self) -> Option<&Name> {
        self.result().and_then(|o| self.seat(o.flip()))
    }
    /// Who carries over as player 1 into the next match.
    /// The winner if there is one; on a drawn match the sitting player 1 stays.
    pub fn retained(&self) -> Option<&Name> {
        self.result().map(|o| self.seat(o).unwrap_or(&self.p1))
    }

    fn seat(&self, outcome: Outcome) -> Option<&Name> {
        match outcome {
            Outcome::P1 => Some(&self.p1),
            Outcome::P2 => Some(&self.p2),
            Outcome::Tie => None,
        }
    }
}
