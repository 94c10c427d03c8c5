// Configuration loading and parsing (config/draft.toml).
//
// Position limits, the bench plan catalog and the grading depth are passed to
// the engine as a value. When no config file exists the built-in defaults are
// used, which reproduce the standard 1QB/2RB/2WR/1TE/2FLEX league.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::bench::BenchPlan;
use crate::draft::player::Position;

/// Default CSV the simulators read when no `--data` flag is given.
pub const DEFAULT_DATA_PATH: &str = "2025 Rankings 2 - Rankings.csv";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Assembled config
// ---------------------------------------------------------------------------

/// How often a bench plan is drawn during the bench rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchPlanMode {
    /// A fresh plan for every candidate evaluated in a bench round.
    #[default]
    PerCheck,
    /// One plan per team, drawn at its first bench-round evaluation and kept
    /// for the rest of the draft.
    PerTeam,
}

/// Guaranteed starting slots per position, plus FLEX slots that any
/// RB/WR/TE may fill.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StarterLimits {
    #[serde(rename = "FLEX", default)]
    pub flex: usize,
    #[serde(flatten)]
    pub by_position: BTreeMap<Position, usize>,
}

impl StarterLimits {
    /// Starting slots for `pos`. Unlisted positions get one slot.
    pub fn slots(&self, pos: Position) -> usize {
        self.by_position.get(&pos).copied().unwrap_or(1)
    }

    /// Total RB/WR/TE players that fit in the starting lineup, counting
    /// dedicated slots and FLEX.
    pub fn flex_capacity(&self) -> usize {
        Position::ALL
            .iter()
            .filter(|p| p.is_flex_eligible())
            .map(|&p| self.slots(p))
            .sum::<usize>()
            + self.flex
    }
}

impl Default for StarterLimits {
    fn default() -> Self {
        StarterLimits {
            flex: 2,
            by_position: BTreeMap::from([
                (Position::Quarterback, 1),
                (Position::RunningBack, 2),
                (Position::WideReceiver, 2),
                (Position::TightEnd, 1),
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftConfig {
    /// Hard per-position roster caps.
    pub max_limits: BTreeMap<Position, usize>,
    pub starters: StarterLimits,
    /// Catalog of bench compositions the selector chooses from.
    pub bench_plans: Vec<BenchPlan>,
    /// Number of trailing rounds treated as bench rounds.
    pub bench_rounds: usize,
    pub bench_plan_mode: BenchPlanMode,
    /// How many of a roster's best-ranked players the grader sums.
    pub grade_top_n: usize,
    pub data_path: String,
}

impl DraftConfig {
    /// Hard cap for `pos`. Validation guarantees every position is listed.
    pub fn max_for(&self, pos: Position) -> usize {
        self.max_limits.get(&pos).copied().unwrap_or(usize::MAX)
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        DraftConfig {
            max_limits: BTreeMap::from([
                (Position::Quarterback, 4),
                (Position::RunningBack, 8),
                (Position::WideReceiver, 8),
                (Position::TightEnd, 3),
            ]),
            starters: StarterLimits::default(),
            bench_plans: BenchPlan::default_catalog(),
            bench_rounds: 8,
            bench_plan_mode: BenchPlanMode::default(),
            grade_top_n: 9,
            data_path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for draft.toml. Every section is optional and
/// falls back to the built-in default.
#[derive(Debug, Deserialize)]
struct DraftFile {
    #[serde(default)]
    draft: DraftSection,
    max_limits: Option<BTreeMap<Position, usize>>,
    starters: Option<StarterLimits>,
    bench_plans: Option<Vec<BenchPlan>>,
}

#[derive(Debug, Default, Deserialize)]
struct DraftSection {
    data_path: Option<String>,
    bench_rounds: Option<usize>,
    bench_plan_mode: Option<BenchPlanMode>,
    grade_top_n: Option<usize>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/draft.toml` relative to `base_dir`.
///
/// A missing file is not an error: the defaults are returned instead.
pub fn load_config_from(base_dir: &Path) -> Result<DraftConfig, ConfigError> {
    let path = base_dir.join("config").join("draft.toml");
    if !path.exists() {
        let config = DraftConfig::default();
        validate(&config)?;
        return Ok(config);
    }

    let text = read_file(&path)?;
    let config = parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;
    Ok(config)
}

/// Parse draft.toml text, filling absent sections from the defaults.
/// Does not validate.
pub fn parse_config(text: &str) -> Result<DraftConfig, toml::de::Error> {
    let file: DraftFile = toml::from_str(text)?;
    let defaults = DraftConfig::default();

    Ok(DraftConfig {
        max_limits: file.max_limits.unwrap_or(defaults.max_limits),
        starters: file.starters.unwrap_or(defaults.starters),
        bench_plans: file.bench_plans.unwrap_or(defaults.bench_plans),
        bench_rounds: file.draft.bench_rounds.unwrap_or(defaults.bench_rounds),
        bench_plan_mode: file
            .draft
            .bench_plan_mode
            .unwrap_or(defaults.bench_plan_mode),
        grade_top_n: file.draft.grade_top_n.unwrap_or(defaults.grade_top_n),
        data_path: file.draft.data_path.unwrap_or(defaults.data_path),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate(config: &DraftConfig) -> Result<(), ConfigError> {
    for pos in Position::ALL {
        if !config.max_limits.contains_key(&pos) {
            return Err(ConfigError::ValidationError {
                field: format!("max_limits.{pos}"),
                message: "every position needs a hard cap".into(),
            });
        }
    }

    if config.bench_plans.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "bench_plans".into(),
            message: "at least one bench plan is required".into(),
        });
    }

    if config.grade_top_n == 0 {
        return Err(ConfigError::ValidationError {
            field: "draft.grade_top_n".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.data_path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "draft.data_path".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(name: &str, text: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("config/draft.toml"), text).unwrap();
        tmp
    }

    #[test]
    fn defaults_match_standard_league() {
        let config = DraftConfig::default();
        assert_eq!(config.max_for(Position::Quarterback), 4);
        assert_eq!(config.max_for(Position::RunningBack), 8);
        assert_eq!(config.max_for(Position::WideReceiver), 8);
        assert_eq!(config.max_for(Position::TightEnd), 3);
        assert_eq!(config.starters.slots(Position::RunningBack), 2);
        assert_eq!(config.starters.flex, 2);
        assert_eq!(config.starters.flex_capacity(), 7);
        assert_eq!(config.bench_plans.len(), 8);
        assert_eq!(config.bench_rounds, 8);
        assert_eq!(config.bench_plan_mode, BenchPlanMode::PerCheck);
        assert_eq!(config.grade_top_n, 9);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let tmp = std::env::temp_dir().join("mockdraft_config_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let config = load_config_from(&tmp).expect("defaults should load");
        assert_eq!(config, DraftConfig::default());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn shipped_defaults_file_matches_builtin() {
        let text = include_str!("../../../defaults/draft.toml");
        let config = parse_config(text).expect("defaults/draft.toml should parse");
        assert_eq!(config, DraftConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_sections() {
        let tmp = write_config(
            "mockdraft_config_partial",
            r#"
[draft]
bench_rounds = 6
bench_plan_mode = "per_team"

[starters]
QB = 2
RB = 2
WR = 3
TE = 1
FLEX = 1
"#,
        );

        let config = load_config_from(&tmp).expect("should load");
        assert_eq!(config.bench_rounds, 6);
        assert_eq!(config.bench_plan_mode, BenchPlanMode::PerTeam);
        assert_eq!(config.starters.slots(Position::Quarterback), 2);
        assert_eq!(config.starters.slots(Position::WideReceiver), 3);
        assert_eq!(config.starters.flex, 1);
        // Untouched sections keep their defaults.
        assert_eq!(config.max_limits, DraftConfig::default().max_limits);
        assert_eq!(config.bench_plans.len(), 8);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn unlisted_starter_position_defaults_to_one_slot() {
        let limits = StarterLimits {
            flex: 0,
            by_position: BTreeMap::from([(Position::RunningBack, 3)]),
        };
        assert_eq!(limits.slots(Position::Quarterback), 1);
        assert_eq!(limits.slots(Position::RunningBack), 3);
        assert_eq!(limits.flex_capacity(), 5);
    }

    #[test]
    fn rejects_missing_max_limit() {
        let tmp = write_config(
            "mockdraft_config_missing_cap",
            r#"
[max_limits]
QB = 4
RB = 8
WR = 8
"#,
        );

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "max_limits.TE");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_bench_catalog() {
        let mut config = DraftConfig::default();
        config.bench_plans.clear();
        let err = validate(&config).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "bench_plans"),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn rejects_zero_grade_depth() {
        let mut config = DraftConfig::default();
        config.grade_top_n = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = write_config("mockdraft_config_invalid", "this is not valid [[[ toml");

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("draft.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_unknown_position_key() {
        let tmp = write_config(
            "mockdraft_config_bad_pos",
            r#"
[max_limits]
QB = 4
RB = 8
WR = 8
TE = 3
K = 1
"#,
        );

        assert!(matches!(
            load_config_from(&tmp),
            Err(ConfigError::ParseError { .. })
        ));

        let _ = fs::remove_dir_all(&tmp);
    }
}
