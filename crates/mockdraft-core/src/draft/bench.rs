// Bench plans: target bench compositions for the late rounds.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::player::Position;
use crate::config::BenchPlanMode;

/// Bench target used for any position a plan does not list.
pub const UNLISTED_BENCH_TARGET: usize = 8;

/// Target number of bench players per position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct BenchPlan(BTreeMap<Position, usize>);

impl BenchPlan {
    pub fn new(qb: usize, rb: usize, wr: usize, te: usize) -> Self {
        BenchPlan(BTreeMap::from([
            (Position::Quarterback, qb),
            (Position::RunningBack, rb),
            (Position::WideReceiver, wr),
            (Position::TightEnd, te),
        ]))
    }

    /// Target for `pos`, or [`UNLISTED_BENCH_TARGET`] if the plan omits it.
    pub fn target(&self, pos: Position) -> usize {
        self.0.get(&pos).copied().unwrap_or(UNLISTED_BENCH_TARGET)
    }

    /// The stock catalog of eight late-round filling patterns.
    pub fn default_catalog() -> Vec<BenchPlan> {
        vec![
            BenchPlan::new(1, 3, 3, 1),
            BenchPlan::new(1, 4, 3, 0),
            BenchPlan::new(1, 2, 5, 0),
            BenchPlan::new(1, 3, 4, 0),
            BenchPlan::new(1, 4, 2, 1),
            BenchPlan::new(1, 2, 4, 1),
            BenchPlan::new(0, 4, 3, 1),
            BenchPlan::new(0, 3, 4, 1),
        ]
    }
}

/// Pick one plan uniformly at random. `None` only for an empty catalog.
pub fn select_bench_plan<'a, R: Rng + ?Sized>(
    catalog: &'a [BenchPlan],
    rng: &mut R,
) -> Option<&'a BenchPlan> {
    catalog.choose(rng)
}

/// Hands out bench plans to the need evaluator according to the configured
/// [`BenchPlanMode`].
#[derive(Debug, Clone)]
pub struct BenchPlanSelector {
    mode: BenchPlanMode,
    catalog: Vec<BenchPlan>,
    /// Per-team plan, filled lazily in `PerTeam` mode.
    assigned: Vec<Option<BenchPlan>>,
}

impl BenchPlanSelector {
    pub fn new(mode: BenchPlanMode, catalog: Vec<BenchPlan>, teams: usize) -> Self {
        BenchPlanSelector {
            mode,
            catalog,
            assigned: vec![None; teams],
        }
    }

    /// The plan `team` should be measured against for one evaluation.
    pub fn plan_for<R: Rng + ?Sized>(&mut self, team: usize, rng: &mut R) -> BenchPlan {
        match self.mode {
            BenchPlanMode::PerCheck => self.draw(rng),
            BenchPlanMode::PerTeam => {
                if let Some(plan) = self.assigned.get(team).and_then(|p| p.clone()) {
                    return plan;
                }
                let plan = self.draw(rng);
                if let Some(slot) = self.assigned.get_mut(team) {
                    *slot = Some(plan.clone());
                }
                plan
            }
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> BenchPlan {
        select_bench_plan(&self.catalog, rng)
            .cloned()
            .unwrap_or_default()
    }
}
