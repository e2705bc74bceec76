use super::*;
use crate::players::Name;
use std::collections::BTreeMap;

/// Name-keyed standings. The map key enforces one row per player,
/// and its ordering is the listing order.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard(BTreeMap<Name, Standing>);

impl Leaderboard {
    /// Insert a zeroed standing if absent. Idempotent.
    pub fn ensure(&mut self, name: &Name) -> &Standing {
        self.entry(name)
    }
    pub fn get(&self, name: &Name) -> Option<&Standing> {
        self.0.get(name)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Credit a decided match.
    pub fn record(&mut self, winner: &Name, loser: &Name) {
        self.entry(winner).win();
        self.entry(loser).lose();
        log::info!("leaderboard: {} beat {}", winner, loser);
    }
    /// Credit a drawn match. Scores are unchanged.
    pub fn record_tie(&mut self, a: &Name, b: &Name) {
        self.entry(a).draw();
        self.entry(b).draw();
        log::info!("leaderboard: {} drew with {}", a, b);
    }

    /// Every player, sorted by name.
    pub fn list(&self) -> Vec<Standing> {
        self.0.values().cloned().collect()
    }
    /// Every player, best first: score, then match wins, then name.
    pub fn ranking(&self) -> Vec<Standing> {
        let mut rows = self.list();
        rows.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.wins.cmp(&a.wins))
                .then_with(|| a.name.cmp(&b.name))
        });
        rows
    }

    fn entry(&mut self, name: &Name) -> &mut Standing {
        self.0
            .entry(name.clone())
            .or_insert_with(|| Standing::from(name.clone()))
    }
}
