//! Left-neighbor candidate ranking
//!
//! Every strip scores every other strip by how well the other strip's right edge
//! continues its own left edge. This is an all-pairs pass over column
//! differences; each strip's list is independent of the others.

use crate::analysis::columns::column_difference;
use crate::io::error::Result;
use crate::spatial::pixels::PixelSource;
use crate::spatial::strips::Strip;

/// A strip proposed as a neighbor together with its fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Id of the proposed neighbor
    pub strip: usize,
    /// Column difference across the shared edge (lower fits better)
    pub score: f64,
}

/// Ranked left-neighbor candidates for every strip, indexed by strip id
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborRanking {
    candidates: Vec<Vec<Candidate>>,
}

impl NeighborRanking {
    /// Wrap precomputed candidate lists
    ///
    /// Each list is expected to be sorted ascending by score and to exclude
    /// its own strip.
    pub const fn from_lists(candidates: Vec<Vec<Candidate>>) -> Self {
        Self { candidates }
    }

    /// Number of ranked strips
    pub const fn strip_count(&self) -> usize {
        self.candidates.len()
    }

    /// All candidates for `strip`, best first
    pub fn candidates(&self, strip: usize) -> &[Candidate] {
        self.candidates.get(strip).map(Vec::as_slice).unwrap_or_default()
    }

    /// The `rank`-th best left neighbor of `strip`, if ranked that deep
    pub fn candidate_at(&self, strip: usize, rank: usize) -> Option<Candidate> {
        self.candidates(strip).get(rank).copied()
    }
}

/// Rank all other strips as left neighbors of `strips[target]`
///
/// Candidate `T` is scored by the difference between the target's left column
/// and `T`'s right column. The sort is stable, so ties keep strip id order.
///
/// # Errors
///
/// Propagates column difference failures
pub fn rank_left_neighbors<P: PixelSource + ?Sized>(
    image: &P,
    strips: &[Strip],
    target: usize,
) -> Result<Vec<Candidate>> {
    let Some(strip) = strips.get(target) else {
        return Ok(Vec::new());
    };

    let mut candidates = strips
        .iter()
        .enumerate()
        .filter(|&(id, _)| id != target)
        .map(|(id, other)| {
            column_difference(image, strip.left(), other.right()).map(|score| Candidate {
                strip: id,
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    Ok(candidates)
}

/// Rank left-neighbor candidates for every strip
///
/// # Errors
///
/// Propagates column difference failures
pub fn rank_all<P: PixelSource + ?Sized>(image: &P, strips: &[Strip]) -> Result<NeighborRanking> {
    let candidates = (0..strips.len())
        .map(|target| rank_left_neighbors(image, strips, target))
        .collect::<Result<Vec<_>>>()?;

    Ok(NeighborRanking { candidates })
}
