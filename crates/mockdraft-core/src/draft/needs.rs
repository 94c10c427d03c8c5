// Roster need evaluation: may this candidate be drafted onto this roster now?
//
// Checks run in a fixed order:
// 1. Hard position cap (always wins).
// 2. Strategy filter, for the designated team only.
// 3. Phase rules: starter needs in early rounds, a bench plan in the last
//    `bench_rounds` rounds.

use super::bench::BenchPlan;
use super::player::{Player, PositionCounts};
use super::roster::Roster;
use super::strategy::{Strategy, StrategyVerdict};
use crate::config::DraftConfig;

/// Which half of the draft a round belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starter,
    Bench,
}

/// The last `bench_rounds` rounds are bench rounds; everything before them
/// fills the starting lineup.
pub fn phase_of(round: usize, total_rounds: usize, bench_rounds: usize) -> Phase {
    if round < total_rounds.saturating_sub(bench_rounds) {
        Phase::Starter
    } else {
        Phase::Bench
    }
}

/// Decide whether `candidate` fits `roster` in `round` of `total_rounds`.
///
/// `bench_plan` is only invoked for bench-phase candidates that survive the
/// cap and strategy checks, so randomness is consumed exactly when a plan is
/// actually consulted.
pub fn fits<F>(
    config: &DraftConfig,
    roster: &Roster,
    candidate: &Player,
    round: usize,
    total_rounds: usize,
    strategy: Option<Strategy>,
    bench_plan: F,
) -> bool
where
    F: FnOnce() -> BenchPlan,
{
    let pos = candidate.position;
    let counts = roster.position_counts();

    if counts.get(pos) >= config.max_for(pos) {
        return false;
    }

    if let Some(strategy) = strategy {
        match strategy.verdict(&counts, pos, round) {
            StrategyVerdict::Reject => return false,
            StrategyVerdict::Accept => return true,
            StrategyVerdict::Defer => {}
        }
    }

    match phase_of(round, total_rounds, config.bench_rounds) {
        Phase::Starter => fits_starters(config, &counts, candidate),
        Phase::Bench => {
            let plan = bench_plan();
            let bench = PositionCounts::tally(roster.bench_window(config.bench_rounds));
            bench.get(pos) < plan.target(pos)
        }
    }
}

fn fits_starters(config: &DraftConfig, counts: &PositionCounts, candidate: &Player) -> bool {
    let pos = candidate.position;
    let own_open = counts.get(pos) < config.starters.slots(pos);
    if pos.is_flex_eligible() {
        own_open || counts.flex_total() < config.starters.flex_capacity()
    } else {
        own_open
    }
}
