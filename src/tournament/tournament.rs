use crate::Error;
use crate::game::*;
use crate::leaderboard::*;
use crate::players::Name;

#[derive(Debug, Default)]
pub struct Tournament {
    game: Option<Match>,
    board: Leaderboard,
}

impl Tournament {
    pub fn phase(&self) -> Phase {
        Phase::from(self.game.as_ref())
    }
    pub fn state(&self) -> MatchSummary {
        MatchSummary::from(self.game.as_ref())
    }
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.board
    }

    /// Add a player to the leaderboard without starting a match.
    pub fn register(&mut self, name: &str) -> Result<Standing, Error> {
        let name = Name::try_from(name)?;
        Ok(self.board.ensure(&name).clone())
    }

    /// Begin a new match.
    ///
    /// After a completed match its winner (or, on a draw, its player 1) is
    /// seated as player 1 and `p1` is ignored. Otherwise both names are taken
    /// as given, and any match still in progress is abandoned unscored.
    pub fn start(&mut self, p1: &str, p2: &str) -> Result<MatchSummary, Error> {
        let p1 = match self.game.as_ref().and_then(Match::retained) {
            Some(kept) => kept.clone(),
            None => Name::try_from(p1)?,
        };
        let p2 = Name::try_from(p2)?;
        if p1 == p2 {
            return Err(Error::InvalidPlayerName("players must be different"));
        }
        if let Some(old) = self.game.as_ref().filter(|g| !g.is_complete()) {
            log::warn!(
                "abandoning {} vs {} after {} rounds",
                old.p1(),
                old.p2(),
                old.round()
            );
        }
        self.board.ensure(&p1);
        self.board.ensure(&p2);
        log::info!("match started: {} vs {}", p1, p2);
        self.game = Some(Match::new(p1, p2));
        Ok(self.state())
    }

    /// Play one round of the current match.
    /// The tenth round closes the match and credits the leaderboard.
    pub fn play_round(&mut self, p1_move: &str, p2_move: &str) -> Result<RoundResult, Error> {
        let game = self.game.as_mut().ok_or(Error::NoActiveMatch)?;
        if game.is_complete() {
            return Err(Error::MatchAlreadyComplete);
        }
        let p1_move = Move::try_from(p1_move)?;
        let p2_move = Move::try_from(p2_move)?;
        let round = game.play(p1_move, p2_move)?;
        let match_outcome = game.result();
        match (game.winner(), game.loser()) {
            (Some(winner), Some(loser)) => self.board.record(winner, loser),
            _ if match_outcome == Some(Outcome::Tie) => self.board.record_tie(game.p1(), game.p2()),
            _ => {}
        }
        if let Some(outcome) = match_outcome {
            log::info!(
                "match complete: {} {}-{} {} ({})",
                game.p1(),
                game.p1_round_wins(),
                game.p2_round_wins(),
                game.p2(),
                outcome
            );
        }
        Ok(RoundResult {
            round,
            rounds_played: game.round(),
            completed: game.is_complete(),
            match_outcome,
            match_winner: game.winner().cloned(),
        })
    }
}
