use clap::Args;
use goscore::config::ScoringConfig;
use goscore::scoring::{compute_result, load_breakdown, ScoreBreakdown, ScoringMethod};
use goscore::{GoScoreError, GsResult};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ResultArgs {
    #[command(flatten)]
    pub scoring: ScoringConfig,

    /// JSON breakdown: {"area": [b, w], "territory": [b, w], "captures": [b, w]}
    #[arg(short, long, conflicts_with_all = ["area", "territory", "captures"])]
    pub file: Option<PathBuf>,

    #[arg(long, num_args = 2, value_names = ["BLACK", "WHITE"], allow_negative_numbers = true)]
    pub area: Option<Vec<f64>>,

    #[arg(long, num_args = 2, value_names = ["BLACK", "WHITE"], allow_negative_numbers = true)]
    pub territory: Option<Vec<f64>>,

    #[arg(long, num_args = 2, value_names = ["BLACK", "WHITE"], allow_negative_numbers = true)]
    pub captures: Option<Vec<f64>>,

    /// Also print the numeric margin
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn pair(values: &Option<Vec<f64>>, flag: &str, method: ScoringMethod) -> GsResult<[f64; 2]> {
    match values.as_deref() {
        Some([black, white]) => Ok([*black, *white]),
        Some(_) => Err(GoScoreError::Config(format!(
            "--{} takes exactly two values",
            flag
        ))),
        None => Err(GoScoreError::Config(format!(
            "--{} is required for {} scoring",
            flag, method
        ))),
    }
}

// Inline values only need the ledgers the chosen method reads.
fn inline_breakdown(args: &ResultArgs, method: ScoringMethod) -> GsResult<ScoreBreakdown> {
    let mut breakdown = ScoreBreakdown::default();
    match method {
        ScoringMethod::Area => {
            breakdown.area = pair(&args.area, "area", method)?;
        }
        ScoringMethod::Territory => {
            breakdown.territory = pair(&args.territory, "territory", method)?;
            breakdown.captures = pair(&args.captures, "captures", method)?;
        }
    }
    Ok(breakdown)
}

pub fn run(args: ResultArgs, config: ScoringConfig) -> GsResult<()> {
    let breakdown = match &args.file {
        Some(path) => {
            info!("📂 Loading breakdown: {}", path.display());
            ScoreBreakdown::try_from(load_breakdown(path)?)?
        }
        None => inline_breakdown(&args, config.method)?,
    };

    let result = compute_result(config.method, &breakdown, config.komi)?;

    println!("{}", result.label);
    if args.verbose {
        println!("margin: {}", result.margin);
    }
    Ok(())
}
