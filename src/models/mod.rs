//! Data structures for ranking: scorecard, options, ranking and standings.

mod options;
mod ranking;
mod scorecard;

pub use options::{RankOptions, ScoreCheck, DEFAULT_MAX_SCORE};
pub(crate) use ranking::TieRange;
pub use ranking::{Ranking, Standing};
pub use scorecard::{Geometry, RankError, Scorecard};
