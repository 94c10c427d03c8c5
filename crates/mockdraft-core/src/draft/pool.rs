// The undrafted player pool, viewable in rank order or ADP order.
//
// Both orderings index into one backing vector, and availability is a single
// flag per player, so drafting a player removes it from both views at once.

use std::collections::HashSet;

use tracing::warn;

use super::player::{Player, PlayerId};

/// Which ordering of the pool a team drafts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOrder {
    /// Overall rank, best first.
    Rank,
    /// Average draft position, earliest first. Ties fall back to rank.
    Adp,
}

#[derive(Debug, Clone)]
pub struct PlayerPool {
    players: Vec<Player>,
    by_rank: Vec<PlayerId>,
    by_adp: Vec<PlayerId>,
    available: Vec<bool>,
    remaining: usize,
    /// Position in each ordering before which every player is drafted.
    rank_cursor: usize,
    adp_cursor: usize,
}

impl PlayerPool {
    /// Build a pool from loaded players. Later rows repeating an earlier
    /// player's name are dropped.
    pub fn new(players: Vec<Player>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(players.len());
        for player in players {
            if seen.insert(player.name.clone()) {
                unique.push(player);
            } else {
                warn!("duplicate player '{}' dropped from pool", player.name);
            }
        }

        let mut by_rank: Vec<PlayerId> = (0..unique.len()).map(PlayerId).collect();
        by_rank.sort_by_key(|id| unique[id.0].rank);

        let mut by_adp: Vec<PlayerId> = (0..unique.len()).map(PlayerId).collect();
        by_adp.sort_by(|a, b| {
            let (pa, pb) = (&unique[a.0], &unique[b.0]);
            pa.adp.total_cmp(&pb.adp).then(pa.rank.cmp(&pb.rank))
        });

        let remaining = unique.len();
        PlayerPool {
            available: vec![true; unique.len()],
            players: unique,
            by_rank,
            by_adp,
            remaining,
            rank_cursor: 0,
            adp_cursor: 0,
        }
    }

    pub fn is_available(&self, id: PlayerId) -> bool {
        self.available.get(id.0).copied().unwrap_or(false)
    }

    /// Number of undrafted players.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Total players the pool started with.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Undrafted players in the given order.
    pub fn iter_available(&self, order: PoolOrder) -> impl Iterator<Item = (PlayerId, &Player)> + '_ {
        let (ids, cursor) = match order {
            PoolOrder::Rank => (&self.by_rank, self.rank_cursor),
            PoolOrder::Adp => (&self.by_adp, self.adp_cursor),
        };
        ids[cursor..]
            .iter()
            .filter(|id| self.available[id.0])
            .map(|&id| (id, &self.players[id.0]))
    }

    /// Mark a player drafted and hand back its record. Returns `None` if the
    /// player was already taken.
    pub fn take(&mut self, id: PlayerId) -> Option<Player> {
        if !self.is_available(id) {
            return None;
        }
        self.available[id.0] = false;
        self.remaining -= 1;
        self.rank_cursor = advance(&self.by_rank, &self.available, self.rank_cursor);
        self.adp_cursor = advance(&self.by_adp, &self.available, self.adp_cursor);
        Some(self.players[id.0].clone())
    }
}

fn advance(ids: &[PlayerId], available: &[bool], mut cursor: usize) -> usize {
    while cursor < ids.len() && !available[ids[cursor].0] {
        cursor += 1;
    }
    cursor
}
