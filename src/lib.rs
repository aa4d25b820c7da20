//! Tournament ranking: library ranking competitors from a set/game score table.
//!
//! Competitors are ordered by their total in the last set. Ties are broken on
//! the last game, then the game before it, back to the first game; anyone
//! still level keeps input order.
//!
//! ```
//! use tournament_ranking::rank_players;
//!
//! let scores = vec![vec![3, 2], vec![2, 3], vec![1, 5]];
//! let ranking = rank_players(&scores, 1, 2).unwrap();
//! assert_eq!(ranking.as_slice(), &[2, 1, 0]);
//! ```

pub mod logic;
pub mod models;

pub use logic::{last_set_totals, rank, rank_players, rank_players_with, standings};
pub use models::{
    Geometry, RankError, RankOptions, Ranking, ScoreCheck, Scorecard, Standing, DEFAULT_MAX_SCORE,
};
