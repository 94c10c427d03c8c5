// Player pool loading from a rankings CSV.
//
// Expected columns: "Player Name", "Pos", "Ovr Rank", "ADP". Extra columns are
// ignored. Kickers and defenses are dropped, as are rows with any required
// field left blank or holding a missing-value marker such as "N/A". Anything
// else that cannot be parsed aborts the load.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::draft::player::{Player, Position};
use crate::draft::pool::PlayerPool;

const NAME_COLUMN: &str = "Player Name";
const POSITION_COLUMN: &str = "Pos";
const RANK_COLUMN: &str = "Ovr Rank";
const ADP_COLUMN: &str = "ADP";

const REQUIRED_COLUMNS: [&str; 4] = [NAME_COLUMN, POSITION_COLUMN, RANK_COLUMN, ADP_COLUMN];

/// Position codes that are excluded from the pool outright.
const EXCLUDED_POSITIONS: [&str; 2] = ["D/ST", "K"];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidValue {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: unknown position '{value}'")]
    UnknownPosition { line: u64, value: String },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One rankings row, everything still as text so blanks can be told apart
/// from malformed values.
#[derive(Debug, Deserialize)]
struct RawRankingRow {
    #[serde(rename = "Player Name")]
    name: Option<String>,
    #[serde(rename = "Pos")]
    position: Option<String>,
    #[serde(rename = "Ovr Rank")]
    rank: Option<String>,
    #[serde(rename = "ADP")]
    adp: Option<String>,
}

/// Cell values that spreadsheet exports use for "no value".
const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !MISSING_MARKERS.contains(&v.as_str()))
}

/// Parse an overall rank. Float text such as "12.0" is truncated.
fn parse_rank(text: &str, line: u64) -> Result<u32, DataError> {
    let invalid = || DataError::InvalidValue {
        line,
        field: "rank",
        value: text.to_string(),
    };
    if let Ok(rank) = text.parse::<u32>() {
        return Ok(rank);
    }
    let value: f64 = text.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(invalid());
    }
    Ok(value.trunc() as u32)
}

fn parse_adp(text: &str, line: u64) -> Result<f64, DataError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::InvalidValue {
            line,
            field: "adp",
            value: text.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Read player rows from any CSV source, in file order.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, DataError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(rdr);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column.to_string()));
        }
    }

    let mut players = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let raw: RawRankingRow = record.deserialize(Some(&headers))?;

        let (Some(name), Some(pos), Some(rank), Some(adp)) = (
            non_blank(raw.name),
            non_blank(raw.position),
            non_blank(raw.rank),
            non_blank(raw.adp),
        ) else {
            debug!("skipping incomplete row at line {}", line);
            continue;
        };

        if EXCLUDED_POSITIONS.iter().any(|x| x.eq_ignore_ascii_case(&pos)) {
            continue;
        }

        let position = Position::from_str_pos(&pos).ok_or_else(|| DataError::UnknownPosition {
            line,
            value: pos.clone(),
        })?;

        players.push(Player {
            name,
            position,
            rank: parse_rank(&rank, line)?,
            adp: parse_adp(&adp, line)?,
        });
    }

    Ok(players)
}

/// Load players from a CSV file.
pub fn load_players(path: &Path) -> Result<Vec<Player>, DataError> {
    let file = std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_players_from_reader(file)
}

/// Load a CSV file straight into a ready-to-draft pool.
pub fn load_pool(path: &Path) -> Result<PlayerPool, DataError> {
    let players = load_players(path)?;
    if players.is_empty() {
        return Err(DataError::Validation(format!(
            "{} produced zero draftable players",
            path.display()
        )));
    }
    let pool = PlayerPool::new(players);
    info!("Loaded {} players from {}", pool.len(), path.display());
    Ok(pool)
}
