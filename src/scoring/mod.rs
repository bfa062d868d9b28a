pub mod bar;
pub mod formatter;
pub mod loader;
pub mod types;

pub use self::bar::{BarContent, DetailsAction, ScoringBar};
pub use self::formatter::{compute_result, compute_result_str, format_margin};
pub use self::loader::{load_breakdown, load_games, load_games_csv, load_games_json, score_games, GameRecord};
pub use self::types::{PartialScoreBreakdown, ScoreBreakdown, ScoreResult, ScoringMethod, Side};
