// The draft engine: snake-ordered, round-by-round allocation of players to
// teams.
//
// Each round walks the teams in snake order. A team scans its pool view (rank
// or ADP) and drafts the first undrafted player the need evaluator accepts.
// If nobody fits, the team's pick for that round is recorded as skipped.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::bench::BenchPlanSelector;
use super::needs;
use super::player::Player;
use super::pool::{PlayerPool, PoolOrder};
use super::roster::Roster;
use super::state::DraftState;
use super::strategy::Strategy;
use crate::config::DraftConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("invalid draft setting `{field}`: {message}")]
    InvalidSettings { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Which pool view each team drafts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolSelection {
    /// The designated team drafts by rank, everyone else by ADP.
    #[default]
    RankForDesignated,
    /// Every team drafts by rank.
    RankForAll,
}

/// Parameters for a single draft run.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSettings {
    pub teams: usize,
    pub rounds: usize,
    /// 1-indexed draft slot of the designated ("your") team.
    pub your_pick: usize,
    /// Strategy applied to the designated team only.
    pub strategy: Option<Strategy>,
    pub pool_selection: PoolSelection,
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            teams: 10,
            rounds: 17,
            your_pick: 1,
            strategy: None,
            pool_selection: PoolSelection::default(),
        }
    }
}

impl DraftSettings {
    pub fn new(teams: usize, rounds: usize, your_pick: usize) -> Self {
        DraftSettings {
            teams,
            rounds,
            your_pick,
            ..DraftSettings::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Option<Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_pool_selection(mut self, selection: PoolSelection) -> Self {
        self.pool_selection = selection;
        self
    }

    /// 0-based index of the designated team.
    pub fn designated_team(&self) -> usize {
        self.your_pick.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.teams == 0 {
            return Err(DraftError::InvalidSettings {
                field: "teams".into(),
                message: "must be greater than 0".into(),
            });
        }
        if self.rounds == 0 {
            return Err(DraftError::InvalidSettings {
                field: "rounds".into(),
                message: "must be greater than 0".into(),
            });
        }
        if self.your_pick == 0 || self.your_pick > self.teams {
            return Err(DraftError::InvalidSettings {
                field: "your_pick".into(),
                message: format!("must be between 1 and {}, got {}", self.teams, self.your_pick),
            });
        }
        Ok(())
    }

    fn pool_order_for(&self, team: usize) -> PoolOrder {
        if team == self.designated_team() || self.pool_selection == PoolSelection::RankForAll {
            PoolOrder::Rank
        } else {
            PoolOrder::Adp
        }
    }

    fn strategy_for(&self, team: usize) -> Option<Strategy> {
        if team == self.designated_team() {
            self.strategy
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Picked(Player),
    /// No undrafted player fit the team's needs this round.
    Skipped,
}

/// One team's turn in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct PickRecord {
    /// 0-based round.
    pub round: usize,
    /// 0-based team index.
    pub team: usize,
    pub outcome: PickOutcome,
}

#[derive(Debug, Clone)]
pub struct DraftResult {
    pub rosters: Vec<Roster>,
    /// Every turn, in the order it was taken.
    pub picks: Vec<PickRecord>,
    pub designated_team: usize,
}

impl DraftResult {
    pub fn roster(&self, team: usize) -> Option<&Roster> {
        self.rosters.get(team)
    }

    pub fn designated_roster(&self) -> Option<&Roster> {
        self.roster(self.designated_team)
    }

    /// Turns where the team found no eligible player.
    pub fn skipped(&self) -> impl Iterator<Item = &PickRecord> + '_ {
        self.picks
            .iter()
            .filter(|p| p.outcome == PickOutcome::Skipped)
    }

    /// The outcome of `team`'s turn in `round`, if that turn happened.
    pub fn outcome(&self, round: usize, team: usize) -> Option<&PickOutcome> {
        self.picks
            .iter()
            .find(|p| p.round == round && p.team == team)
            .map(|p| &p.outcome)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Team order for a round: ascending in even rounds, descending in odd ones.
pub fn snake_order(round: usize, teams: usize) -> Vec<usize> {
    if round % 2 == 0 {
        (0..teams).collect()
    } else {
        (0..teams).rev().collect()
    }
}

#[derive(Debug, Clone)]
pub struct DraftEngine {
    config: DraftConfig,
}

impl DraftEngine {
    pub fn new(config: DraftConfig) -> Self {
        DraftEngine { config }
    }

    /// Run a full draft over `pool`.
    ///
    /// `rng` drives bench plan selection; seed it for reproducible drafts.
    pub fn run<R: Rng + ?Sized>(
        &self,
        pool: PlayerPool,
        settings: &DraftSettings,
        rng: &mut R,
    ) -> Result<DraftResult, DraftError> {
        settings.validate()?;

        info!(
            "Starting draft: {} teams, {} rounds, designated slot {}, strategy {}, {} players",
            settings.teams,
            settings.rounds,
            settings.your_pick,
            settings.strategy.map_or("none", |s| s.label()),
            pool.len()
        );

        let mut state = DraftState::new(pool, settings.teams);
        let mut bench = BenchPlanSelector::new(
            self.config.bench_plan_mode,
            self.config.bench_plans.clone(),
            settings.teams,
        );
        let mut picks = Vec::with_capacity(settings.teams * settings.rounds);

        for round in 0..settings.rounds {
            for team in snake_order(round, settings.teams) {
                let order = settings.pool_order_for(team);
                let strategy = settings.strategy_for(team);

                let choice = {
                    let roster = &state.rosters[team];
                    state
                        .pool
                        .iter_available(order)
                        .find(|(_, candidate)| {
                            needs::fits(
                                &self.config,
                                roster,
                                candidate,
                                round,
                                settings.rounds,
                                strategy,
                                || bench.plan_for(team, &mut *rng),
                            )
                        })
                        .map(|(id, _)| id)
                };

                let outcome = match choice.and_then(|id| state.record_pick(team, id)) {
                    Some(player) => {
                        debug!(
                            "round {} team {}: {} ({}) rank {}",
                            round + 1,
                            team + 1,
                            player.name,
                            player.position,
                            player.rank
                        );
                        PickOutcome::Picked(player)
                    }
                    None => {
                        warn!(
                            "round {} team {}: no eligible player among {} remaining",
                            round + 1,
                            team + 1,
                            state.pool.remaining()
                        );
                        PickOutcome::Skipped
                    }
                };

                picks.push(PickRecord {
                    round,
                    team,
                    outcome,
                });
            }
        }

        let skipped = picks
            .iter()
            .filter(|p| p.outcome == PickOutcome::Skipped)
            .count();
        info!(
            "Draft complete: {} players drafted, {} turns skipped, {} left in pool",
            state.drafted_count(),
            skipped,
            state.pool.remaining()
        );

        Ok(DraftResult {
            rosters: state.into_rosters(),
            picks,
            designated_team: settings.designated_team(),
        })
    }
}
