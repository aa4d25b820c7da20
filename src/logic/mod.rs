//! Ranking logic: last-set ordering and tiebreaks.

mod last_set;
mod rank;
mod tiebreak;

pub use last_set::last_set_totals;
pub use rank::{rank, rank_players, rank_players_with, standings};
