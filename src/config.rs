use crate::scoring::ScoringMethod;
use crate::{GoScoreError, GsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_KOMI: f64 = 6.5;

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Scoring rule set used when a game does not name one.
    #[arg(long, value_enum, default_value_t = ScoringMethod::Area)]
    pub method: ScoringMethod,

    /// Compensation for White, used when a game does not set its own.
    #[arg(long, default_value_t = DEFAULT_KOMI, allow_negative_numbers = true)]
    pub komi: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            method: ScoringMethod::Area,
            komi: DEFAULT_KOMI,
        }
    }
}

impl ScoringConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GsResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the values the user actually typed, leaving file values in
    /// place where clap only filled in a default.
    pub fn merge_from_cli(&mut self, cli: &ScoringConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(method, "method");
        update_if_present!(komi, "komi");
    }

    pub fn validate(&self) -> GsResult<()> {
        if !self.komi.is_finite() {
            return Err(GoScoreError::InvalidKomi(self.komi));
        }
        Ok(())
    }
}
