//! draft-sim: simulate one snake draft and print every team's picks and grade.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use mockdraft_cli::{logging, report, seeded_rng};
use mockdraft_core::config::{self, BenchPlanMode};
use mockdraft_core::data;
use mockdraft_core::draft::engine::{DraftEngine, DraftSettings};
use mockdraft_core::draft::strategy::Strategy;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BenchMode {
    /// Draw a new bench plan for every candidate considered
    PerCheck,
    /// Draw one bench plan per team
    PerTeam,
}

impl From<BenchMode> for BenchPlanMode {
    fn from(mode: BenchMode) -> Self {
        match mode {
            BenchMode::PerCheck => BenchPlanMode::PerCheck,
            BenchMode::PerTeam => BenchPlanMode::PerTeam,
        }
    }
}

/// Fantasy Football Draft Simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of teams
    #[arg(long, default_value_t = 10)]
    teams: usize,

    /// Total rounds, including the bench rounds
    #[arg(long, default_value_t = 17)]
    rounds: usize,

    /// Your draft slot (1-indexed)
    #[arg(long = "your-pick", default_value_t = 1)]
    your_pick: usize,

    /// Rankings CSV (overrides the configured data path)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Directory containing config/draft.toml
    #[arg(long = "config-dir", value_name = "DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Strategy for your team, e.g. "Zero RB" or "robust-rb"
    #[arg(long)]
    strategy: Option<String>,

    /// Seed for bench plan selection; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Override how bench plans are drawn
    #[arg(long = "bench-plan-mode", value_enum)]
    bench_plan_mode: Option<BenchMode>,

    /// Enable verbose logging (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose)?;

    let mut config =
        config::load_config_from(&args.config_dir).context("failed to load configuration")?;
    if let Some(mode) = args.bench_plan_mode {
        config.bench_plan_mode = mode.into();
    }

    let data_path = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data_path));
    let pool = data::load_pool(&data_path)
        .with_context(|| format!("failed to load player pool from {}", data_path.display()))?;

    let strategy = args.strategy.as_deref().and_then(|tag| {
        let parsed = Strategy::from_tag(tag);
        if parsed.is_none() {
            warn!("unrecognized strategy '{}', drafting without one", tag);
        }
        parsed
    });

    let settings =
        DraftSettings::new(args.teams, args.rounds, args.your_pick).with_strategy(strategy);

    let (mut rng, seed) = seeded_rng(args.seed);
    info!("Bench plan seed: {}", seed);

    let top_n = config.grade_top_n;
    let result = DraftEngine::new(config)
        .run(pool, &settings, &mut rng)
        .context("draft failed")?;

    print!("{}", report::render_draft(&result, top_n));
    Ok(())
}
