//! strategy-sim: run the same league once per named strategy and compare the
//! designated team's roster and grade.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use mockdraft_cli::{logging, report, seeded_rng};
use mockdraft_core::config;
use mockdraft_core::data;
use mockdraft_core::draft::engine::{DraftEngine, DraftSettings, PoolSelection};
use mockdraft_core::draft::strategy::Strategy;

const NUM_TEAMS: usize = 10;
const ROUNDS: usize = 17;
const YOUR_PICK: usize = 2;

/// Fantasy Football Strategy Comparison
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rankings CSV (overrides the configured data path)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Directory containing config/draft.toml
    #[arg(long = "config-dir", value_name = "DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Seed for bench plan selection; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose)?;

    let config =
        config::load_config_from(&args.config_dir).context("failed to load configuration")?;
    let data_path = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data_path));
    let pool = data::load_pool(&data_path)
        .with_context(|| format!("failed to load player pool from {}", data_path.display()))?;

    let (mut rng, seed) = seeded_rng(args.seed);
    info!("Bench plan seed: {}", seed);

    let top_n = config.grade_top_n;
    let engine = DraftEngine::new(config);

    println!("=== Strategy Simulation Results ===");
    for strategy in Strategy::ALL {
        let settings = DraftSettings::new(NUM_TEAMS, ROUNDS, YOUR_PICK)
            .with_strategy(Some(strategy))
            .with_pool_selection(PoolSelection::RankForAll);
        let result = engine
            .run(pool.clone(), &settings, &mut rng)
            .with_context(|| format!("draft with strategy {strategy} failed"))?;
        print!("{}", report::render_strategy(strategy, &result, top_n));
    }

    Ok(())
}
