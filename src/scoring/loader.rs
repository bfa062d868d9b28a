use super::formatter::compute_result;
use super::types::{PartialScoreBreakdown, ScoreBreakdown, ScoreResult, ScoringMethod};
use crate::{GoScoreError, GsResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, warn};

/// One finished game as read from a batch file.
/// `method` and `komi` fall back to the configured values when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub komi: Option<f64>,
    #[serde(flatten)]
    pub breakdown: PartialScoreBreakdown,
}

// Flat CSV row. Empty cells deserialize to None.
#[derive(Debug, Deserialize)]
struct CsvGameRow {
    name: String,
    method: Option<String>,
    komi: Option<f64>,
    area_b: Option<f64>,
    area_w: Option<f64>,
    territory_b: Option<f64>,
    territory_w: Option<f64>,
    captures_b: Option<f64>,
    captures_w: Option<f64>,
}

impl From<CsvGameRow> for GameRecord {
    fn from(row: CsvGameRow) -> Self {
        Self {
            name: row.name,
            method: row.method,
            komi: row.komi,
            breakdown: PartialScoreBreakdown {
                area: vec![row.area_b, row.area_w],
                territory: vec![row.territory_b, row.territory_w],
                captures: vec![row.captures_b, row.captures_w],
            },
        }
    }
}

/// Reads a single breakdown object:
/// `{"area": [b, w], "territory": [b, w], "captures": [b, w]}`.
pub fn load_breakdown<P: AsRef<Path>>(path: P) -> GsResult<PartialScoreBreakdown> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_games_csv<P: AsRef<Path>>(path: P) -> GsResult<Vec<GameRecord>> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut games = Vec::new();
    for row in rdr.deserialize::<CsvGameRow>() {
        games.push(GameRecord::from(row?));
    }
    debug!("Loaded {} games from CSV", games.len());
    Ok(games)
}

pub fn load_games_json<P: AsRef<Path>>(path: P) -> GsResult<Vec<GameRecord>> {
    let content = fs::read_to_string(path)?;
    let games: Vec<GameRecord> = serde_json::from_str(&content)?;
    debug!("Loaded {} games from JSON", games.len());
    Ok(games)
}

/// Picks the reader from the file extension (`.csv` or `.json`).
pub fn load_games<P: AsRef<Path>>(path: P) -> GsResult<Vec<GameRecord>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_games_csv(path),
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_games_json(path),
        _ => Err(GoScoreError::Config(format!(
            "Unsupported games file '{}' (expected .csv or .json)",
            path.display()
        ))),
    }
}

fn score_game(
    record: &GameRecord,
    default_method: ScoringMethod,
    default_komi: f64,
) -> GsResult<ScoreResult> {
    let method = match record.method.as_deref() {
        Some(m) => m
            .parse::<ScoringMethod>()
            .map_err(|_| GoScoreError::InvalidMethod(m.to_string()))?,
        None => default_method,
    };
    let komi = record.komi.unwrap_or(default_komi);
    let breakdown = ScoreBreakdown::try_from(&record.breakdown)?;

    compute_result(method, &breakdown, komi)
}

/// Scores every game independently. Results keep the input order.
pub fn score_games(
    records: &[GameRecord],
    default_method: ScoringMethod,
    default_komi: f64,
) -> Vec<GsResult<ScoreResult>> {
    records
        .par_iter()
        .map(|record| {
            let result = score_game(record, default_method, default_komi);
            if let Err(e) = &result {
                warn!(game = %record.name, "{}", e);
            }
            result
        })
        .collect()
}
