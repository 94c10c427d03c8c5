// Player records and football positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Draftable positions. Kickers and defenses are filtered out at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
}

impl Position {
    /// Every position, in display order.
    pub const ALL: [Position; 4] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
    ];

    /// Parse a position code ("QB", "rb", ...). Returns `None` for anything
    /// that is not a draftable position, including "K" and "D/ST".
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
        }
    }

    /// Whether this position can fill a FLEX starting slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(
            self,
            Position::RunningBack | Position::WideReceiver | Position::TightEnd
        )
    }

    /// Dense index for per-position count arrays.
    pub fn index(&self) -> usize {
        match self {
            Position::Quarterback => 0,
            Position::RunningBack => 1,
            Position::WideReceiver => 2,
            Position::TightEnd => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Identity of a player within one loaded pool: its index in the pool's
/// backing vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub usize);

/// An immutable player record.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub position: Position,
    /// Overall rank, lower is better.
    pub rank: u32,
    /// Average draft position, lower is better.
    pub adp: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, rank: u32, adp: f64) -> Self {
        Player {
            name: name.into(),
            position,
            rank,
            adp,
        }
    }
}

/// Number of players at each position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounts([usize; 4]);

impl PositionCounts {
    pub fn tally<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut counts = PositionCounts::default();
        for p in players {
            counts.0[p.position.index()] += 1;
        }
        counts
    }

    pub fn get(&self, pos: Position) -> usize {
        self.0[pos.index()]
    }

    /// Combined count of FLEX-eligible players (RB + WR + TE).
    pub fn flex_total(&self) -> usize {
        Position::ALL
            .iter()
            .filter(|p| p.is_flex_eligible())
            .map(|&p| self.get(p))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_position_codes() {
        assert_eq!(Position::from_str_pos("QB"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos(" rb "), Some(Position::RunningBack));
        assert_eq!(Position::from_str_pos("Wr"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("TE"), Some(Position::TightEnd));
        assert_eq!(Position::from_str_pos("K"), None);
        assert_eq!(Position::from_str_pos("D/ST"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for pos in Position::ALL {
            assert_eq!(Position::from_str_pos(pos.display_str()), Some(pos));
            assert_eq!(pos.to_string(), pos.display_str());
        }
    }

    #[test]
    fn only_skill_positions_are_flex_eligible() {
        assert!(!Position::Quarterback.is_flex_eligible());
        assert!(Position::RunningBack.is_flex_eligible());
        assert!(Position::WideReceiver.is_flex_eligible());
        assert!(Position::TightEnd.is_flex_eligible());
    }

    #[test]
    fn tally_counts_each_position() {
        let players = vec![
            Player::new("A", Position::RunningBack, 1, 1.0),
            Player::new("B", Position::RunningBack, 2, 2.0),
            Player::new("C", Position::Quarterback, 3, 3.0),
            Player::new("D", Position::TightEnd, 4, 4.0),
        ];
        let counts = PositionCounts::tally(&players);
        assert_eq!(counts.get(Position::RunningBack), 2);
        assert_eq!(counts.get(Position::Quarterback), 1);
        assert_eq!(counts.get(Position::WideReceiver), 0);
        assert_eq!(counts.flex_total(), 3);
    }
}
