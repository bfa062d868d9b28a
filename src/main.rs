use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use goscore::config::ScoringConfig;
use goscore::GsResult;
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Go game result scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with default scoring settings ({"method": ..., "komi": ...})
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single game
    Result(cmd::result::ResultArgs),
    /// Score a batch of games and print a report
    Report(cmd::report::ReportArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(
    path: Option<&str>,
    cli_scoring: &ScoringConfig,
    sub_matches: &clap::ArgMatches,
) -> GsResult<ScoringConfig> {
    let config = match path {
        Some(path) => {
            info!("⚖️  Loading scoring config from: {}", path);
            let mut file_config = ScoringConfig::load_from_file(path)?;
            file_config.merge_from_cli(cli_scoring, sub_matches);
            file_config
        }
        None => *cli_scoring,
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    // Raw matches tell typed values apart from clap defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("No subcommand given");
        process::exit(2);
    };

    let cli_scoring = match &cli.command {
        Commands::Result(args) => args.scoring,
        Commands::Report(args) => args.scoring,
    };

    let config = resolve_config(cli.config.as_deref(), &cli_scoring, sub_matches)
        .unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });
    debug!(?config, "resolved scoring config");

    let outcome = match cli.command {
        Commands::Result(args) => cmd::result::run(args, config),
        Commands::Report(args) => cmd::report::run(args, config),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
