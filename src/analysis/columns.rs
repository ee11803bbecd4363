//! Normalized dissimilarity between two image columns
//!
//! The score sums absolute channel differences over all rows and divides by half
//! the summed brightness of both columns. Dividing by brightness keeps scores
//! comparable between dark and bright images, so only relative magnitudes matter.

use crate::io::error::{Result, UnshredError, invalid_parameter};
use crate::spatial::pixels::PixelSource;

/// Difference score between columns `a` and `b` (lower means more alike)
///
/// The score is symmetric bit for bit: each column's brightness is accumulated
/// separately per row and the two totals are combined commutatively.
///
/// # Errors
///
/// Returns an error if:
/// - either column lies outside the image
/// - both columns are entirely black, or the image has no rows
pub fn column_difference<P: PixelSource + ?Sized>(image: &P, a: usize, b: usize) -> Result<f64> {
    let width = image.width();
    for column in [a, b] {
        if column >= width {
            return Err(invalid_parameter(
                "column",
                &column,
                &format!("image is only {width} columns wide"),
            ));
        }
    }

    let mut difference = 0.0;
    let mut brightness = 0.0;

    for y in 0..image.height() {
        let pa = image.pixel_at(a, y);
        let pb = image.pixel_at(b, y);

        difference += pa
            .iter()
            .zip(pb.iter())
            .map(|(ca, cb)| (ca - cb).abs())
            .sum::<f64>();
        brightness += pa.iter().sum::<f64>() + pb.iter().sum::<f64>();
    }

    let normalizer = brightness / 2.0;
    if normalizer <= 0.0 {
        return Err(UnshredError::DivisionUndefined {
            column_a: a,
            column_b: b,
        });
    }

    Ok(difference / normalizer)
}

/// Scores for every adjacent column pair, indexed by boundary
///
/// Entry `i - 1` holds the difference between columns `i - 1` and `i`, so the
/// vector has `width - 1` elements. An image narrower than two columns yields
/// an empty vector.
///
/// # Errors
///
/// Propagates the first column difference that cannot be computed
pub fn boundary_differences<P: PixelSource + ?Sized>(image: &P) -> Result<Vec<f64>> {
    (1..image.width())
        .map(|column| column_difference(image, column - 1, column))
        .collect()
}
