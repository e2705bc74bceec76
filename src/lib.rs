//! Sequential rock-paper-scissors matches with winner retention.
//!
//! ## Modules
//!
//! - [`players`] — Validated player names
//! - [`game`] — Moves, round outcomes, and the single-match state machine
//! - [`leaderboard`] — Cumulative per-player standings
//! - [`tournament`] — Application state tying one match slot to one leaderboard
//! - [`hosting`] — actix-web surface over a shared tournament
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod players;
pub mod tournament;

#[cfg(feature = "server")]
pub mod hosting;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Cumulative leaderboard points (one per match won).
pub type Score = u32;
/// Count of rounds or matches.
pub type Tally = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Rounds per match. A match completes on the round that reaches this count.
pub const MAX_ROUNDS: Tally = 10;
/// Leaderboard points awarded to the winner of a completed match.
pub const MATCH_WIN_POINTS: Score = 1;
/// Label reported by the leaderboard endpoint describing what `score` counts.
pub const SCORING: &str = "match_wins";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate termination.
/// All state is in memory, so there is nothing to flush on the way out.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
