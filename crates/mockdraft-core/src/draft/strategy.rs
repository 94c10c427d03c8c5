// Named drafting strategies applied to the designated team.

use std::fmt;

use super::player::{Position, PositionCounts};

/// Rounds (0-based) before which the RB-avoidance strategies hold off.
const RB_WAIT_ROUNDS: usize = 5;
/// Round from which Robust RB insists on running backs.
const ROBUST_RB_FROM_ROUND: usize = 4;
/// Running backs Robust RB wants rostered.
const ROBUST_RB_QUOTA: usize = 3;
/// Rounds reserved for the named position by the "Early" strategies.
const EARLY_ROUNDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// No running backs in the first five rounds.
    ZeroRb,
    /// Exactly one running back in the first five rounds.
    HeroRb,
    /// From round 4 on, only running backs until three are rostered.
    RobustRb,
    /// Quarterbacks only in the first two rounds.
    QbEarly,
    /// Tight ends only in the first two rounds.
    TeEarly,
}

/// What a strategy says about one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyVerdict {
    /// No opinion: fall through to the normal roster-need rules.
    Defer,
    Reject,
    /// Take the candidate regardless of the roster-need rules.
    Accept,
}

impl Strategy {
    /// The comparison battery, in the order it is run.
    pub const ALL: [Strategy; 5] = [
        Strategy::ZeroRb,
        Strategy::HeroRb,
        Strategy::RobustRb,
        Strategy::QbEarly,
        Strategy::TeEarly,
    ];

    /// Look up a strategy by its label ("Zero RB", "hero-rb", ...).
    /// Unrecognized tags mean "no strategy".
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized: String = tag
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "zerorb" => Some(Strategy::ZeroRb),
            "herorb" => Some(Strategy::HeroRb),
            "robustrb" => Some(Strategy::RobustRb),
            "qbearly" => Some(Strategy::QbEarly),
            "teearly" => Some(Strategy::TeEarly),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::ZeroRb => "Zero RB",
            Strategy::HeroRb => "Hero RB",
            Strategy::RobustRb => "Robust RB",
            Strategy::QbEarly => "QB Early",
            Strategy::TeEarly => "TE Early",
        }
    }

    /// Judge a candidate at `position` for a roster with `counts` in `round`.
    pub fn verdict(&self, counts: &PositionCounts, position: Position, round: usize) -> StrategyVerdict {
        let is_rb = position == Position::RunningBack;
        match self {
            Strategy::ZeroRb if round < RB_WAIT_ROUNDS && is_rb => StrategyVerdict::Reject,
            Strategy::HeroRb
                if round < RB_WAIT_ROUNDS && is_rb && counts.get(Position::RunningBack) >= 1 =>
            {
                StrategyVerdict::Reject
            }
            Strategy::RobustRb
                if round >= ROBUST_RB_FROM_ROUND
                    && counts.get(Position::RunningBack) < ROBUST_RB_QUOTA =>
            {
                if is_rb {
                    StrategyVerdict::Accept
                } else {
                    StrategyVerdict::Reject
                }
            }
            Strategy::QbEarly if round < EARLY_ROUNDS && position != Position::Quarterback => {
                StrategyVerdict::Reject
            }
            Strategy::TeEarly if round < EARLY_ROUNDS && position != Position::TightEnd => {
                StrategyVerdict::Reject
            }
            _ => StrategyVerdict::Defer,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
