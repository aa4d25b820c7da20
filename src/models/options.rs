//! Ranking options.

use serde::{Deserialize, Serialize};

/// Highest score a single game can award.
pub const DEFAULT_MAX_SCORE: u32 = 5;

/// Whether scores are checked against `RankOptions::max_score` before ranking.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCheck {
    /// Reject any score above the maximum.
    #[default]
    Strict,
    /// Rank whatever is there; only the ordering of scores matters.
    Lenient,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    pub score_check: ScoreCheck,
    pub max_score: u32,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            score_check: ScoreCheck::Strict,
            max_score: DEFAULT_MAX_SCORE,
        }
    }
}

impl RankOptions {
    pub fn lenient() -> Self {
        Self {
            score_check: ScoreCheck::Lenient,
            ..Self::default()
        }
    }
}
