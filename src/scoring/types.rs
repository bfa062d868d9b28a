use crate::{GoScoreError, GsResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// Stones on the board plus enclosed empty points.
    #[default]
    Area,
    /// Enclosed empty points plus prisoners.
    Territory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Position of this side in a `[Black, White]` pair.
    pub fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

/// Per-side score ledgers as produced by the scoring engine.
/// Every pair is indexed `[Black, White]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub area: [f64; 2],
    pub territory: [f64; 2],
    pub captures: [f64; 2],
}

impl ScoreBreakdown {
    pub fn new(area: [f64; 2], territory: [f64; 2], captures: [f64; 2]) -> Self {
        Self {
            area,
            territory,
            captures,
        }
    }

    /// Checks that every value is a real number. NaN is what a missing
    /// upstream value degrades to, so it counts as incomplete data.
    pub fn validate(&self) -> GsResult<()> {
        let ledgers = [
            ("area", &self.area),
            ("territory", &self.territory),
            ("captures", &self.captures),
        ];

        for (name, pair) in ledgers {
            for (side, value) in pair.iter().enumerate() {
                if !value.is_finite() {
                    return Err(GoScoreError::IncompleteScoreData(format!(
                        "{}[{}] is {}",
                        name, side, value
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A breakdown as it arrives from files or an upstream engine: any value
/// may be absent. Convert with `ScoreBreakdown::try_from`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialScoreBreakdown {
    pub area: Vec<Option<f64>>,
    pub territory: Vec<Option<f64>>,
    pub captures: Vec<Option<f64>>,
}

impl PartialScoreBreakdown {
    /// Returns the name of the first absent value, if any.
    pub fn first_missing(&self) -> Option<String> {
        let ledgers = [
            ("area", &self.area),
            ("territory", &self.territory),
            ("captures", &self.captures),
        ];

        for (name, values) in ledgers {
            for side in 0..2 {
                if values.get(side).copied().flatten().is_none() {
                    return Some(format!("{}[{}]", name, side));
                }
            }
        }
        None
    }
}

fn required_pair(values: &[Option<f64>], name: &str) -> GsResult<[f64; 2]> {
    let mut pair = [0.0; 2];
    for (side, slot) in pair.iter_mut().enumerate() {
        *slot = values.get(side).copied().flatten().ok_or_else(|| {
            GoScoreError::IncompleteScoreData(format!("{}[{}] is missing", name, side))
        })?;
    }
    Ok(pair)
}

impl TryFrom<&PartialScoreBreakdown> for ScoreBreakdown {
    type Error = GoScoreError;

    fn try_from(partial: &PartialScoreBreakdown) -> GsResult<Self> {
        let breakdown = ScoreBreakdown {
            area: required_pair(&partial.area, "area")?,
            territory: required_pair(&partial.territory, "territory")?,
            captures: required_pair(&partial.captures, "captures")?,
        };
        breakdown.validate()?;
        Ok(breakdown)
    }
}

impl TryFrom<PartialScoreBreakdown> for ScoreBreakdown {
    type Error = GoScoreError;

    fn try_from(partial: PartialScoreBreakdown) -> GsResult<Self> {
        ScoreBreakdown::try_from(&partial)
    }
}

impl From<ScoreBreakdown> for PartialScoreBreakdown {
    fn from(b: ScoreBreakdown) -> Self {
        let wrap = |pair: [f64; 2]| pair.iter().map(|v| Some(*v)).collect();
        Self {
            area: wrap(b.area),
            territory: wrap(b.territory),
            captures: wrap(b.captures),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Black's lead after komi. Negative when White is ahead.
    pub margin: f64,
    pub label: String,
}

impl ScoreResult {
    pub fn winner(&self) -> Option<Side> {
        if self.margin > 0.0 {
            Some(Side::Black)
        } else if self.margin < 0.0 {
            Some(Side::White)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none()
    }
}
