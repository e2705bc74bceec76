use super::*;
use crate::Error;
use crate::SCORING;
use crate::tournament::Tournament;
use tokio::sync::Mutex;

/// Holds the one tournament this process serves.
/// Each call takes the lock for its whole read-modify-write.
#[derive(Default)]
pub struct Arena(Mutex<Tournament>);

impl Arena {
    pub async fn start(&self, req: &StartRequest) -> Result<StateResponse, Error> {
        self.0
            .lock()
            .await
            .start(&req.p1, &req.p2)
            .map(|state| StateResponse { ok: true, state })
    }

    pub async fn play_round(&self, req: &PlayRoundRequest) -> Result<RoundResponse, Error> {
        let mut tournament = self.0.lock().await;
        let round = tournament.play_round(&req.p1_move, &req.p2_move)?;
        let leaderboard = round
            .completed
            .then(|| tournament.leaderboard().list());
        Ok(RoundResponse {
            ok: true,
            state: tournament.state(),
            round,
            leaderboard,
        })
    }

    pub async fn state(&self) -> StateResponse {
        StateResponse {
            ok: true,
            state: self.0.lock().await.state(),
        }
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<PlayerResponse, Error> {
        self.0
            .lock()
            .await
            .register(&req.name)
            .inspect(|p| log::info!("registered player {}", p.name))
            .map(|player| PlayerResponse { ok: true, player })
    }

    pub async fn leaderboard(&self) -> LeaderboardResponse {
        let tournament = self.0.lock().await;
        LeaderboardResponse {
            ok: true,
            leaderboard: tournament.leaderboard().list(),
            ranking: tournament.leaderboard().ranking(),
            scoring: SCORING,
        }
    }
}
