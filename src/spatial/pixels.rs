//! Read-only pixel buffer abstraction consumed by the reconstruction core
//!
//! The core never decodes or allocates images itself. Anything that can answer
//! `width`, `height` and an RGB triple per coordinate can be unshredded, as long
//! as every channel uses the same numeric scale.

use image::RgbImage;
use ndarray::Array3;

/// RGB channel triple on a caller-defined scale
pub type Rgb = [f64; 3];

/// Random-access view of an RGB image
pub trait PixelSource {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Color at column `x`, row `y`
    ///
    /// Coordinates are expected inside `width() x height()`; implementations
    /// return black for anything outside.
    fn pixel_at(&self, x: usize, y: usize) -> Rgb;
}

/// Dense RGB grid stored as `(row, column, channel)`
#[derive(Debug, Clone, PartialEq)]
pub struct RgbGrid {
    data: Array3<f64>,
}

impl RgbGrid {
    /// Build a grid by evaluating `color(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, color: F) -> Self
    where
        F: Fn(usize, usize) -> Rgb,
    {
        let data = Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            color(x, y).get(c).copied().unwrap_or(0.0)
        });
        Self { data }
    }

    /// Copy a decoded 8-bit image into a grid
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut data = Array3::zeros((height, width, 3));

        for (x, y, pixel) in image.enumerate_pixels() {
            for (c, &value) in pixel.0.iter().enumerate() {
                if let Some(slot) = data.get_mut((y as usize, x as usize, c)) {
                    *slot = f64::from(value);
                }
            }
        }

        Self { data }
    }
}

impl PixelSource for RgbGrid {
    fn width(&self) -> usize {
        self.data.dim().1
    }

    fn height(&self) -> usize {
        self.data.dim().0
    }

    fn pixel_at(&self, x: usize, y: usize) -> Rgb {
        let channel = |c: usize| self.data.get((y, x, c)).copied().unwrap_or(0.0);
        [channel(0), channel(1), channel(2)]
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel_at(&self, x: usize, y: usize) -> Rgb {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return [0.0; 3];
        };
        self.get_pixel_checked(x, y)
            .map_or([0.0; 3], |pixel| pixel.0.map(f64::from))
    }
}
