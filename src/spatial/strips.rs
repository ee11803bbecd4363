//! Strip records and partitioning of an image into equal-width strips

use crate::io::configuration::MIN_STRIP_COUNT;
use crate::io::error::{Result, UnshredError, invalid_parameter};
use crate::spatial::pixels::PixelSource;
use std::fmt;

/// One vertical slice of the source image
///
/// Column bounds are inclusive and fixed at creation. Strips are addressed by
/// their index in the partition, which every other stage uses as the strip id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strip {
    left: usize,
    right: usize,
}

impl Strip {
    /// Create a strip spanning `left..=right`
    ///
    /// # Errors
    ///
    /// Returns an error if `right` is left of `left`
    pub fn new(left: usize, right: usize) -> Result<Self> {
        if right < left {
            return Err(invalid_parameter(
                "right",
                &right,
                &format!("must not be left of column {left}"),
            ));
        }
        Ok(Self { left, right })
    }

    /// Leftmost column (inclusive)
    pub const fn left(&self) -> usize {
        self.left
    }

    /// Rightmost column (inclusive)
    pub const fn right(&self) -> usize {
        self.right
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Iterate the covered columns left to right
    pub fn columns(&self) -> std::ops::RangeInclusive<usize> {
        self.left..=self.right
    }
}

impl fmt::Display for Strip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.left, self.right)
    }
}

/// Slice `image` into `image.width() / width` contiguous strips
///
/// Strips are produced left to right; that order only fixes the strip ids and
/// carries no meaning for reconstruction. Remainder columns are dropped.
///
/// # Errors
///
/// Returns an error if:
/// - `width` is zero
/// - fewer than two strips fit into the image
pub fn partition<P: PixelSource + ?Sized>(image: &P, width: usize) -> Result<Vec<Strip>> {
    if width == 0 {
        return Err(invalid_parameter("width", &width, &"strip width must be positive"));
    }

    let image_width = image.width();
    let strip_count = image_width / width;
    if strip_count < MIN_STRIP_COUNT {
        return Err(UnshredError::InvalidStripCount {
            image_width,
            strip_width: width,
            strip_count,
        });
    }

    (0..strip_count)
        .map(|i| Strip::new(i * width, (i + 1) * width - 1))
        .collect()
}
