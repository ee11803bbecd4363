//! Strip width inference from periodic column discontinuities
//!
//! Shredding an image into equal strips and shuffling them leaves strong edges
//! at multiples of the strip width. The columns with the strongest edges are
//! therefore expected to share the width as a common factor, which the greatest
//! common divisor recovers even when a few true edges rank below the probe.

use crate::analysis::columns::boundary_differences;
use crate::io::configuration::MIN_STRIP_WIDTH;
use crate::io::error::{Result, UnshredError, WidthFailure};
use crate::math::divisor::gcd_of;
use crate::spatial::pixels::PixelSource;
use log::debug;

/// Boundary between column `column - 1` and `column`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    /// Column right of the boundary
    pub column: usize,
    /// Difference score across the boundary
    pub score: f64,
}

/// Result of strip width inference
#[derive(Debug, Clone, PartialEq)]
pub struct WidthEstimate {
    /// Inferred strip width in columns
    pub width: usize,
    /// Boundaries folded into the width, strongest first
    pub probed: Vec<Boundary>,
}

/// All interior boundaries ordered strongest first
///
/// The sort is stable, so equal scores keep ascending column order.
///
/// # Errors
///
/// Propagates column difference failures
pub fn ranked_boundaries<P: PixelSource + ?Sized>(image: &P) -> Result<Vec<Boundary>> {
    let mut boundaries: Vec<Boundary> = boundary_differences(image)?
        .into_iter()
        .enumerate()
        .map(|(index, score)| Boundary {
            column: index + 1,
            score,
        })
        .collect();

    boundaries.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(boundaries)
}

/// Estimate the strip width of a shredded image
///
/// Folds the `probe_depth + 1` strongest boundary columns with GCD. A deeper
/// probe tolerates fewer spurious strong edges but needs more true ones.
///
/// # Errors
///
/// Returns an error if:
/// - the image has fewer than `probe_depth + 2` columns
/// - the strongest boundaries have a common divisor of 0 or 1
/// - a column difference is undefined (black columns)
pub fn detect_strip_width<P: PixelSource + ?Sized>(
    image: &P,
    probe_depth: usize,
) -> Result<WidthEstimate> {
    let required = probe_depth.saturating_add(1);
    let available = image.width().saturating_sub(1);
    if available < required {
        return Err(UnshredError::WidthDetectionFailed {
            reason: WidthFailure::InsufficientBoundaries {
                required,
                available,
            },
        });
    }

    let mut probed = ranked_boundaries(image)?;
    probed.truncate(required);

    let columns: Vec<usize> = probed.iter().map(|boundary| boundary.column).collect();
    let divisor = gcd_of(columns.iter().copied()).unwrap_or(0);
    debug!("probed boundaries {columns:?} give common divisor {divisor}");

    if divisor < MIN_STRIP_WIDTH {
        return Err(UnshredError::WidthDetectionFailed {
            reason: WidthFailure::DegenerateDivisor {
                divisor,
                boundaries: columns,
            },
        });
    }

    Ok(WidthEstimate {
        width: divisor,
        probed,
    })
}
