use crate::reports::{self, Tally};
use clap::Args;
use goscore::config::ScoringConfig;
use goscore::scoring::{load_games, score_games};
use goscore::{GoScoreError, GsResult};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub scoring: ScoringConfig,

    /// Batch of finished games (.csv or .json)
    #[arg(short, long)]
    pub games: PathBuf,

    /// Exit with an error when any game could not be scored
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

pub fn run(args: ReportArgs, config: ScoringConfig) -> GsResult<()> {
    info!("📂 Loading games: {}", args.games.display());
    let games = load_games(&args.games)?;

    let results = score_games(&games, config.method, config.komi);
    let tally = Tally::from_results(&results);

    reports::print_results_table(&games, &results, &config);
    reports::print_summary(&tally);

    if args.strict && tally.errors > 0 {
        return Err(GoScoreError::Config(format!(
            "{} of {} games could not be scored",
            tally.errors,
            games.len()
        )));
    }
    Ok(())
}
