//! Greedy multi-round right-neighbor matching
//!
//! In round `r` every strip bids for its `r`-th ranked left neighbor. A strip
//! that still lacks a right neighbor takes the bidder with the lowest score.
//! Later rounds give strips whose best match was taken a second and third
//! chance with weaker candidates.

use crate::algorithm::bitset::StripSet;
use crate::algorithm::ranking::{Candidate, NeighborRanking};
use log::debug;

/// Right-neighbor links for every strip, indexed by strip id
///
/// A link stores the neighbor id and the score that won it. Every strip is
/// the right neighbor of at most one other strip.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborLinks {
    links: Vec<Option<Candidate>>,
}

impl NeighborLinks {
    /// Links for `strip_count` strips with nothing assigned yet
    pub fn new(strip_count: usize) -> Self {
        Self {
            links: vec![None; strip_count],
        }
    }

    /// Wrap an explicit adjacency array
    pub const fn from_links(links: Vec<Option<Candidate>>) -> Self {
        Self { links }
    }

    /// Number of strips covered
    pub const fn strip_count(&self) -> usize {
        self.links.len()
    }

    /// The link leaving `strip`, if one was assigned
    pub fn link(&self, strip: usize) -> Option<Candidate> {
        self.links.get(strip).copied().flatten()
    }

    /// Id of the strip believed to sit right of `strip`
    pub fn right_neighbor(&self, strip: usize) -> Option<usize> {
        self.link(strip).map(|link| link.strip)
    }

    /// Strips left without a right neighbor, ascending
    pub fn unlinked(&self) -> Vec<usize> {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(strip, link)| link.is_none().then_some(strip))
            .collect()
    }
}

/// Number of matching rounds that can actually run
///
/// At least the best candidates are always tried, and no strip has more than
/// `strip_count - 1` candidates.
pub fn effective_rank_depth(rank_depth: usize, strip_count: usize) -> usize {
    rank_depth.clamp(1, strip_count.saturating_sub(1).max(1))
}

/// Assign right neighbors from ranked left-neighbor candidates
///
/// Rounds stop early once at most one strip remains unassigned, leaving the
/// true right edge of the image unlinked. Ties between bidders go to the
/// lowest strip id.
pub fn match_right_neighbors(ranking: &NeighborRanking, rank_depth: usize) -> NeighborLinks {
    let strip_count = ranking.strip_count();
    let mut links = NeighborLinks::new(strip_count);
    let mut unassigned = StripSet::all(strip_count);
    let mut claimed = StripSet::new(strip_count);

    for rank in 0..effective_rank_depth(rank_depth, strip_count) {
        if unassigned.count() <= 1 {
            break;
        }

        // Each bidder proposes exactly one target this round, so the best bid
        // per target can be collected in a single pass
        let mut best_bids: Vec<Option<Candidate>> = vec![None; strip_count];
        for bidder in 0..strip_count {
            if claimed.contains(bidder) {
                continue;
            }
            let Some(wanted) = ranking.candidate_at(bidder, rank) else {
                continue;
            };
            if !unassigned.contains(wanted.strip) {
                continue;
            }
            if let Some(slot) = best_bids.get_mut(wanted.strip) {
                if slot.is_none_or(|current| wanted.score < current.score) {
                    *slot = Some(Candidate {
                        strip: bidder,
                        score: wanted.score,
                    });
                }
            }
        }

        let mut assigned = 0;
        for (strip, bid) in best_bids.into_iter().enumerate() {
            let Some(winner) = bid else {
                continue;
            };
            if let Some(link) = links.links.get_mut(strip) {
                *link = Some(winner);
                claimed.insert(winner.strip);
                unassigned.remove(strip);
                assigned += 1;
            }
        }

        debug!(
            "rank {rank}: linked {assigned} strip(s), {} still without a right neighbor",
            unassigned.count()
        );
    }

    links
}
