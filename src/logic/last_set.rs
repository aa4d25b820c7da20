//! Primary ordering: competitors by their total in the last set.

use crate::models::Scorecard;

/// Last-set total for every competitor, indexed by competitor.
pub fn last_set_totals(scorecard: &Scorecard) -> Vec<u64> {
    (0..scorecard.competitors())
        .map(|c| scorecard.last_set_total(c))
        .collect()
}

/// Sort `rankings` by last-set total, highest first.
///
/// `sort_by` is stable, so competitors with equal totals keep the order they
/// had on entry (input index order when starting from the identity ranking).
/// Tiebreaks rely on this when every game is tied.
pub(crate) fn sort_by_last_set(scorecard: &Scorecard, rankings: &mut [usize]) {
    let totals = last_set_totals(scorecard);
    rankings.sort_by(|&a, &b| totals[b].cmp(&totals[a]));
}
