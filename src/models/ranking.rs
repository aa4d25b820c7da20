//! Ranking, TieRange and the Standing view.

use serde::{Deserialize, Serialize};

/// Competitor indices from best to worst. A permutation of `0..competitors`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking(Vec<usize>);

impl Ranking {
    /// Identity order `0..competitors`, the starting point before sorting.
    pub(crate) fn identity(competitors: usize) -> Self {
        Self((0..competitors).collect())
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Competitor in first place.
    pub fn winner(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// 0-based position of `competitor`, if present.
    pub fn position_of(&self, competitor: usize) -> Option<usize> {
        self.0.iter().position(|&c| c == competitor)
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Ranking> for Vec<usize> {
    fn from(ranking: Ranking) -> Self {
        ranking.0
    }
}

/// Inclusive range of ranking positions whose competitors share a last-set total.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TieRange {
    pub(crate) first: usize,
    pub(crate) last: usize,
}

impl TieRange {
    pub(crate) fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last);
        Self { first, last }
    }

    /// Number of competitors in the range.
    pub(crate) fn size(&self) -> usize {
        self.last - self.first + 1
    }
}

/// One row of the final standings (for display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based place.
    pub place: usize,
    pub competitor: usize,
    pub last_set_total: u64,
}
