//! Tiebreaks: competitors level on last-set total are separated game by game,
//! starting from the last game played and working backward.

use crate::models::{Scorecard, TieRange};
use std::cmp::Ordering;

/// Maximal range of positions from `start` whose competitors share the
/// last-set total of `rankings[start]`. `rankings` must already be sorted by
/// last-set total.
pub(crate) fn tied_range(scorecard: &Scorecard, rankings: &[usize], start: usize) -> TieRange {
    let total = scorecard.last_set_total(rankings[start]);
    let mut last = start;
    while last + 1 < rankings.len() && scorecard.last_set_total(rankings[last + 1]) == total {
        last += 1;
    }
    TieRange::new(start, last)
}

/// Compare two competitors on `game`, stepping back one game at a time while
/// they are level. `Equal` only if they are level in every game up to `game`.
fn compare_back_from(scorecard: &Scorecard, ahead: usize, behind: usize, game: usize) -> Ordering {
    (0..=game)
        .rev()
        .map(|g| scorecard.game_score(ahead, g).cmp(&scorecard.game_score(behind, g)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Reorder the competitors in `range` by their score in `game`, highest first.
///
/// Bubble passes over adjacent pairs, all at the same `game`. A pair level in
/// `game` is settled on its own by the latest earlier game where they differ;
/// a pair level in every game keeps its current order. Passes repeat until
/// one makes no swap.
///
/// Returns true if any competitor in `range` moved.
pub(crate) fn tie_break(
    scorecard: &Scorecard,
    rankings: &mut [usize],
    range: TieRange,
    game: usize,
) -> bool {
    let mut changed = false;
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in range.first..range.last {
            let (ahead, behind) = (rankings[i], rankings[i + 1]);
            if compare_back_from(scorecard, ahead, behind, game) == Ordering::Less {
                log::trace!("competitor {} moves above {} (from game {})", behind, ahead, game);
                rankings.swap(i, i + 1);
                swapped = true;
            }
        }
        changed |= swapped;
    }
    changed
}

/// Scan a ranking sorted by last-set total and break every tie in it.
/// Each tie range is resolved once, then scanning resumes after it.
/// Returns the number of tie ranges found.
pub(crate) fn break_ties(scorecard: &Scorecard, rankings: &mut [usize]) -> usize {
    let last_game = scorecard.geometry.last_game();
    let mut ties = 0;
    let mut position = 0;
    while position + 1 < rankings.len() {
        if scorecard.last_set_total(rankings[position])
            == scorecard.last_set_total(rankings[position + 1])
        {
            let range = tied_range(scorecard, rankings, position);
            let moved = tie_break(scorecard, rankings, range, last_game);
            log::trace!(
                "{} competitors tied on last-set total {} at positions {}..={} (moved: {})",
                range.size(),
                scorecard.last_set_total(rankings[range.first]),
                range.first,
                range.last,
                moved
            );
            ties += 1;
            position = range.last;
        }
        position += 1;
    }
    ties
}
