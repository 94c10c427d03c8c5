// Draft-wide mutable state: the shrinking pool and each team's roster.

use super::player::{Player, PlayerId};
use super::pool::PlayerPool;
use super::roster::Roster;

#[derive(Debug, Clone)]
pub struct DraftState {
    pub pool: PlayerPool,
    pub rosters: Vec<Roster>,
}

impl DraftState {
    pub fn new(pool: PlayerPool, teams: usize) -> Self {
        DraftState {
            pool,
            rosters: (0..teams).map(Roster::new).collect(),
        }
    }

    /// Move a player from the pool onto `team`'s roster.
    ///
    /// Returns the drafted player, or `None` if the player was already taken
    /// or the team does not exist (the state is left untouched).
    pub fn record_pick(&mut self, team: usize, id: PlayerId) -> Option<Player> {
        if team >= self.rosters.len() {
            return None;
        }
        let player = self.pool.take(id)?;
        self.rosters[team].push(player.clone());
        Some(player)
    }

    /// Players drafted so far across all teams.
    pub fn drafted_count(&self) -> usize {
        self.rosters.iter().map(Roster::len).sum()
    }

    pub fn into_rosters(self) -> Vec<Roster> {
        self.rosters
    }
}
