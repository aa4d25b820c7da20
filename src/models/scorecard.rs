//! Scorecard, its set/game Geometry, and RankError.

use crate::models::options::{RankOptions, ScoreCheck};
use serde::{Deserialize, Serialize};

/// Errors that can occur when ranking a scorecard.
///
/// `EmptyScorecard`, `InvalidGeometry` and `RowLength` describe a malformed
/// table shape; see [`RankError::is_geometry`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RankError {
    /// No competitors at all.
    EmptyScorecard,
    /// `sets` or `games` is zero, or `sets * games` does not fit in a `usize`.
    InvalidGeometry { sets: usize, games: usize },
    /// A row does not have exactly `sets * games` entries (also covers ragged tables).
    RowLength {
        competitor: usize,
        expected: usize,
        found: usize,
    },
    /// A score above `max` (strict score check only).
    ScoreOutOfRange {
        competitor: usize,
        game: usize,
        score: u32,
        max: u32,
    },
}

impl RankError {
    /// True for errors about the table's shape rather than its values.
    pub fn is_geometry(&self) -> bool {
        !matches!(self, RankError::ScoreOutOfRange { .. })
    }
}

impl std::fmt::Display for RankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankError::EmptyScorecard => write!(f, "Scorecard has no competitors"),
            RankError::InvalidGeometry { sets, games } => {
                write!(f, "Invalid tournament shape: {} sets of {} games", sets, games)
            }
            RankError::RowLength {
                competitor,
                expected,
                found,
            } => write!(
                f,
                "Competitor {} has {} scores, expected {}",
                competitor, found, expected
            ),
            RankError::ScoreOutOfRange {
                competitor,
                game,
                score,
                max,
            } => write!(
                f,
                "Competitor {} scored {} in game {} (max {})",
                competitor, score, game, max
            ),
        }
    }
}

impl std::error::Error for RankError {}

/// Shape of a tournament: `sets` contiguous blocks of `games` columns each.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub sets: usize,
    pub games: usize,
}

impl Geometry {
    pub fn new(sets: usize, games: usize) -> Result<Self, RankError> {
        match sets.checked_mul(games) {
            Some(columns) if columns > 0 => Ok(Self { sets, games }),
            _ => Err(RankError::InvalidGeometry { sets, games }),
        }
    }

    /// Total number of games across all sets (columns per row). Does not
    /// overflow for a geometry built by `new`.
    pub fn columns(&self) -> usize {
        self.sets * self.games
    }

    /// Column index of the last game played.
    pub fn last_game(&self) -> usize {
        self.columns() - 1
    }

    /// Columns belonging to the final set.
    pub fn last_set(&self) -> std::ops::Range<usize> {
        self.columns() - self.games..self.columns()
    }
}

/// Score table: `scores[i][j]` is competitor `i`'s score in game `j`, sets
/// concatenated in play order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    #[serde(flatten)]
    pub geometry: Geometry,
    pub scores: Vec<Vec<u32>>,
}

impl Scorecard {
    /// Build a scorecard, checking its shape (not its values).
    pub fn new(scores: Vec<Vec<u32>>, sets: usize, games: usize) -> Result<Self, RankError> {
        let scorecard = Self {
            geometry: Geometry::new(sets, games)?,
            scores,
        };
        scorecard.check_shape()?;
        Ok(scorecard)
    }

    pub fn competitors(&self) -> usize {
        self.scores.len()
    }

    /// Shape checks plus, with `ScoreCheck::Strict`, the score range.
    /// Needed after deserializing, which bypasses `new`.
    pub fn validate(&self, options: &RankOptions) -> Result<(), RankError> {
        Geometry::new(self.geometry.sets, self.geometry.games)?;
        self.check_shape()?;
        if options.score_check == ScoreCheck::Strict {
            self.check_scores(options.max_score)?;
        }
        Ok(())
    }

    fn check_shape(&self) -> Result<(), RankError> {
        if self.scores.is_empty() {
            return Err(RankError::EmptyScorecard);
        }
        let expected = self.geometry.columns();
        match self
            .scores
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((competitor, row)) => Err(RankError::RowLength {
                competitor,
                expected,
                found: row.len(),
            }),
            None => Ok(()),
        }
    }

    fn check_scores(&self, max: u32) -> Result<(), RankError> {
        for (competitor, row) in self.scores.iter().enumerate() {
            if let Some((game, &score)) = row.iter().enumerate().find(|(_, s)| **s > max) {
                return Err(RankError::ScoreOutOfRange {
                    competitor,
                    game,
                    score,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Score of `competitor` in a single game column.
    pub fn game_score(&self, competitor: usize, game: usize) -> u32 {
        self.scores[competitor][game]
    }

    /// Sum of `competitor`'s scores over the final set. Summed as `u64` so
    /// unchecked (lenient) scores cannot overflow it.
    pub fn last_set_total(&self, competitor: usize) -> u64 {
        self.scores[competitor][self.geometry.last_set()]
            .iter()
            .map(|&score| u64::from(score))
            .sum()
    }
}
