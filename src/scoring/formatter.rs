use super::types::{ScoreBreakdown, ScoreResult, ScoringMethod};
use crate::{GoScoreError, GsResult};
use tracing::debug;

/// Computes Black's margin after komi and the bar label for it.
///
/// Komi always counts for White, so it is subtracted from Black's side of
/// the ledger under both methods. The result depends only on the arguments.
pub fn compute_result(
    method: ScoringMethod,
    breakdown: &ScoreBreakdown,
    komi: f64,
) -> GsResult<ScoreResult> {
    if !komi.is_finite() {
        return Err(GoScoreError::InvalidKomi(komi));
    }
    breakdown.validate()?;

    let margin = match method {
        ScoringMethod::Area => breakdown.area[0] - breakdown.area[1] - komi,
        ScoringMethod::Territory => {
            breakdown.territory[0] - breakdown.territory[1] + breakdown.captures[0]
                - breakdown.captures[1]
                - komi
        }
    };

    let label = format_margin(margin);
    debug!(%method, komi, margin, %label, "computed score result");

    Ok(ScoreResult { margin, label })
}

/// Same as [`compute_result`] but takes the method as the host passes it
/// (`"area"` or `"territory"`). Anything else is rejected, never defaulted.
pub fn compute_result_str(
    method: &str,
    breakdown: &ScoreBreakdown,
    komi: f64,
) -> GsResult<ScoreResult> {
    let method: ScoringMethod = method
        .parse()
        .map_err(|_| GoScoreError::InvalidMethod(method.to_string()))?;
    compute_result(method, breakdown, komi)
}

/// `B+<margin>`, `W+<-margin>` or `Draw`.
///
/// The numeral is the shortest decimal that parses back to the same `f64`
/// (6.5 renders as "6.5", 3.0 as "3").
pub fn format_margin(margin: f64) -> String {
    if margin > 0.0 {
        format!("B+{}", margin)
    } else if margin < 0.0 {
        format!("W+{}", -margin)
    } else {
        "Draw".to_string()
    }
}
