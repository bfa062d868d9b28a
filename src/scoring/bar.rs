use super::formatter::compute_result;
use super::types::{ScoreBreakdown, ScoreResult, ScoringMethod};
use crate::{GoScoreError, GsResult};
use std::fmt;
use tracing::{debug, warn};

pub const DETAILS_CAPTION: &str = "Details";

/// The host's "show the scoring details" navigation.
///
/// Takes nothing and returns nothing. Closures implement it, so a host can
/// pass `|| app.open_score_drawer()`.
pub trait DetailsAction: Send + Sync {
    fn trigger(&self);
}

impl<F> DetailsAction for F
where
    F: Fn() + Send + Sync,
{
    fn trigger(&self) {
        self()
    }
}

/// What the bar shows: the details button and the result next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarContent {
    pub button_caption: &'static str,
    pub result: ScoreResult,
}

/// Framework-free model of the scoring bar.
pub struct ScoringBar {
    method: ScoringMethod,
    komi: f64,
    breakdown: Option<ScoreBreakdown>,
    on_details: Box<dyn DetailsAction>,
}

impl ScoringBar {
    pub fn new(method: ScoringMethod, komi: f64, on_details: impl DetailsAction + 'static) -> Self {
        Self {
            method,
            komi,
            breakdown: None,
            on_details: Box::new(on_details),
        }
    }

    pub fn with_breakdown(mut self, breakdown: Option<ScoreBreakdown>) -> Self {
        self.breakdown = breakdown;
        self
    }

    pub fn set_breakdown(&mut self, breakdown: Option<ScoreBreakdown>) {
        self.breakdown = breakdown;
    }

    pub fn set_method(&mut self, method: ScoringMethod) {
        self.method = method;
    }

    pub fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    pub fn method(&self) -> ScoringMethod {
        self.method
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    pub fn content(&self) -> GsResult<BarContent> {
        let breakdown = self.breakdown.as_ref().ok_or_else(|| {
            warn!("scoring bar rendered without a score breakdown");
            GoScoreError::IncompleteScoreData("no score breakdown available".to_string())
        })?;

        let result = compute_result(self.method, breakdown, self.komi)?;
        Ok(BarContent {
            button_caption: DETAILS_CAPTION,
            result,
        })
    }

    pub fn click_details(&self) {
        debug!("scoring bar details requested");
        self.on_details.trigger();
    }
}

impl fmt::Debug for ScoringBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringBar")
            .field("method", &self.method)
            .field("komi", &self.komi)
            .field("breakdown", &self.breakdown)
            .finish_non_exhaustive()
    }
}
