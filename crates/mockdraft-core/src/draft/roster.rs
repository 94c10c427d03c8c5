// A team's drafted players, in pick order.

use super::player::{Player, PositionCounts};

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    /// 0-based draft slot of the owning team.
    pub team: usize,
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(team: usize) -> Self {
        Roster {
            team,
            players: Vec::new(),
        }
    }

    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn position_counts(&self) -> PositionCounts {
        PositionCounts::tally(&self.players)
    }

    /// The most recent `n` picks (all of them if fewer than `n`).
    pub fn bench_window(&self, n: usize) -> &[Player] {
        let start = self.players.len().saturating_sub(n);
        &self.players[start..]
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::player::Position;

    fn roster_of(n: usize) -> Roster {
        let mut roster = Roster::new(0);
        for i in 0..n {
            roster.push(Player::new(
                format!("P{i}"),
                Position::WideReceiver,
                i as u32 + 1,
                i as f64 + 1.0,
            ));
        }
        roster
    }

    #[test]
    fn bench_window_takes_trailing_picks() {
        let roster = roster_of(12);
        let window = roster.bench_window(8);
        assert_eq!(window.len(), 8);
        assert_eq!(window[0].name, "P4");
        assert_eq!(window[7].name, "P11");
    }

    #[test]
    fn bench_window_of_short_roster_is_whole_roster() {
        let roster = roster_of(3);
        assert_eq!(roster.bench_window(8).len(), 3);
        assert!(Roster::new(1).bench_window(8).is_empty());
    }

    #[test]
    fn has_player_matches_by_name() {
        let roster = roster_of(2);
        assert!(roster.has_player("P1"));
        assert!(!roster.has_player("P2"));
        assert_eq!(roster.len(), 2);
        assert!(!roster.is_empty());
    }
}
