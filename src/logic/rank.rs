//! Ranking entry points: validate, sort by last set, break ties.

use crate::logic::last_set::sort_by_last_set;
use crate::logic::tiebreak::break_ties;
use crate::models::{RankError, RankOptions, Ranking, Scorecard, Standing};

/// Rank competitors best to worst.
///
/// `scores[i][j]` is competitor `i`'s score in game `j`, with `sets` blocks of
/// `games` columns in play order. Scores are checked against the default
/// maximum of 5; use [`rank_players_with`] to change that.
pub fn rank_players(
    scores: &[Vec<u32>],
    sets: usize,
    games: usize,
) -> Result<Ranking, RankError> {
    rank_players_with(scores, sets, games, &RankOptions::default())
}

/// [`rank_players`] with explicit options.
pub fn rank_players_with(
    scores: &[Vec<u32>],
    sets: usize,
    games: usize,
    options: &RankOptions,
) -> Result<Ranking, RankError> {
    let scorecard = Scorecard::new(scores.to_vec(), sets, games)?;
    rank(&scorecard, options)
}

/// Rank a scorecard.
///
/// 1. Validate shape (and score range when strict).
/// 2. Stable sort by last-set total, descending.
/// 3. Within each run of equal totals, order by the last game, then the one
///    before it, and so on; competitors level on every game keep input order.
pub fn rank(scorecard: &Scorecard, options: &RankOptions) -> Result<Ranking, RankError> {
    scorecard.validate(options)?;
    log::debug!(
        "Ranking {} competitor(s) over {} set(s) of {} game(s)",
        scorecard.competitors(),
        scorecard.geometry.sets,
        scorecard.geometry.games
    );

    let mut ranking = Ranking::identity(scorecard.competitors());
    sort_by_last_set(scorecard, ranking.as_mut_slice());
    let ties = break_ties(scorecard, ranking.as_mut_slice());
    if ties > 0 {
        log::debug!("Resolved {} tie(s) on last-set total", ties);
    }
    Ok(ranking)
}

/// Ranked standings with places and last-set totals, best first.
pub fn standings(
    scorecard: &Scorecard,
    options: &RankOptions,
) -> Result<Vec<Standing>, RankError> {
    let ranking = rank(scorecard, options)?;
    Ok(ranking
        .iter()
        .enumerate()
        .map(|(i, &competitor)| Standing {
            place: i + 1,
            competitor,
            last_set_total: scorecard.last_set_total(competitor),
        })
        .collect())
}
