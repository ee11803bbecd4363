//! Reconstruction pipeline orchestration
//!
//! Runs width detection, partitioning, ranking, matching and linearization in
//! order over a read-only pixel source and collects everything a caller needs
//! to render or inspect the result.

use crate::{
    algorithm::linearize::{ReconstructionWarning, linearize},
    algorithm::matching::{NeighborLinks, match_right_neighbors},
    algorithm::ranking::{NeighborRanking, rank_all},
    analysis::width::{WidthEstimate, detect_strip_width},
    io::configuration::{DEFAULT_PROBE_DEPTH, DEFAULT_RANK_DEPTH},
    io::error::{Result, UnshredError, invalid_parameter},
    spatial::pixels::PixelSource,
    spatial::strips::{Strip, partition},
};
use log::{debug, info, warn};
use std::fmt;

/// Parameters controlling width detection and neighbor matching
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconstructionConfig {
    /// Extra boundaries folded into the width divisor beyond the strongest
    pub probe_depth: usize,
    /// Matching rounds over ranked candidates
    pub rank_depth: usize,
    /// Known strip width; skips detection when set
    pub strip_width: Option<usize>,
    /// Fail instead of warning when cyclic links had to be broken
    pub strict: bool,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            probe_depth: DEFAULT_PROBE_DEPTH,
            rank_depth: DEFAULT_RANK_DEPTH,
            strip_width: None,
            strict: false,
        }
    }
}

impl ReconstructionConfig {
    /// Check parameter ranges before any pixel is touched
    ///
    /// # Errors
    ///
    /// Returns an error if a fixed strip width of zero is requested
    pub fn validate(&self) -> Result<()> {
        if self.strip_width == Some(0) {
            return Err(invalid_parameter(
                "strip_width",
                &0,
                &"strip width must be positive",
            ));
        }
        Ok(())
    }
}

/// Pipeline stage reported to observers as it begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Inferring the strip width
    DetectingWidth,
    /// Cutting the image into strips
    Partitioning,
    /// Scoring all strip pairs
    Ranking,
    /// Assigning right neighbors
    Matching,
    /// Assembling the final order
    Linearizing,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 5] = [
        Self::DetectingWidth,
        Self::Partitioning,
        Self::Ranking,
        Self::Matching,
        Self::Linearizing,
    ];

    /// Zero-based position in execution order
    pub const fn index(self) -> usize {
        match self {
            Self::DetectingWidth => 0,
            Self::Partitioning => 1,
            Self::Ranking => 2,
            Self::Matching => 3,
            Self::Linearizing => 4,
        }
    }

    /// Short human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::DetectingWidth => "detecting width",
            Self::Partitioning => "partitioning",
            Self::Ranking => "ranking",
            Self::Matching => "matching",
            Self::Linearizing => "linearizing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything inferred about a shredded image
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Strip width used for partitioning
    pub strip_width: usize,
    /// Width detection details, absent when the width was given
    pub width_estimate: Option<WidthEstimate>,
    /// Strips in partition order; their indices are the strip ids
    pub strips: Vec<Strip>,
    /// Left-neighbor candidates per strip
    pub ranking: NeighborRanking,
    /// Right-neighbor links chosen by matching
    pub links: NeighborLinks,
    /// Strip ids left to right
    pub order: Vec<usize>,
    /// Non-fatal problems found while ordering
    pub warnings: Vec<ReconstructionWarning>,
}

impl Reconstruction {
    /// Strips in reconstructed order
    pub fn ordered_strips(&self) -> Vec<Strip> {
        self.order
            .iter()
            .filter_map(|&id| self.strips.get(id).copied())
            .collect()
    }

    /// Inclusive `(left, right)` source column ranges in reconstructed order
    pub fn column_ranges(&self) -> Vec<(usize, usize)> {
        self.ordered_strips()
            .iter()
            .map(|strip| (strip.left(), strip.right()))
            .collect()
    }

    /// Whether cyclic links had to be broken to produce the order
    pub const fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Reconstruct the strip order of `image`
///
/// # Errors
///
/// See [`reconstruct_with_observer`]
pub fn reconstruct<P: PixelSource + ?Sized>(
    image: &P,
    config: &ReconstructionConfig,
) -> Result<Reconstruction> {
    reconstruct_with_observer(image, config, |_| {})
}

/// Reconstruct the strip order of `image`, reporting each stage as it starts
///
/// # Errors
///
/// Returns an error if:
/// - the configuration is invalid
/// - a column difference is undefined (black columns)
/// - the strip width cannot be detected
/// - fewer than two strips fit into the image
/// - `strict` is set and cyclic links had to be broken
pub fn reconstruct_with_observer<P, F>(
    image: &P,
    config: &ReconstructionConfig,
    mut observer: F,
) -> Result<Reconstruction>
where
    P: PixelSource + ?Sized,
    F: FnMut(Stage),
{
    config.validate()?;

    observer(Stage::DetectingWidth);
    let (strip_width, width_estimate) = match config.strip_width {
        Some(width) => (width, None),
        None => {
            let estimate = detect_strip_width(image, config.probe_depth)?;
            (estimate.width, Some(estimate))
        }
    };
    info!("strip width = {strip_width}");

    observer(Stage::Partitioning);
    let strips = partition(image, strip_width)?;
    info!("number of strips = {}", strips.len());

    observer(Stage::Ranking);
    let ranking = rank_all(image, &strips)?;

    observer(Stage::Matching);
    let links = match_right_neighbors(&ranking, config.rank_depth);
    let unlinked = links.unlinked();
    if unlinked.len() > 1 {
        debug!("strips {unlinked:?} have no right neighbor; order splits into several runs");
    }

    observer(Stage::Linearizing);
    let linearization = linearize(&links);

    if !linearization.warnings.is_empty() {
        warn!(
            "reconstruction degraded: {} cyclic chain(s) broken",
            linearization.warnings.len()
        );
        if config.strict {
            return Err(UnshredError::DegradedReconstruction {
                cycles: linearization.warnings.len(),
            });
        }
    }

    Ok(Reconstruction {
        strip_width,
        width_estimate,
        strips,
        ranking,
        links,
        order: linearization.order,
        warnings: linearization.warnings,
    })
}
