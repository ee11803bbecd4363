//! Seeded shredding of intact images into shuffled strips
//!
//! Produces inputs for the reconstruction with a known answer: the returned
//! permutation lists which source strip ended up at each position.

use crate::io::error::Result;
use crate::io::image::render_strips;
use crate::spatial::strips::{Strip, partition};
use image::RgbImage;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

/// A shredded image and the order its strips were placed in
#[derive(Debug, Clone)]
pub struct Shredded {
    /// Image with its strips shuffled
    pub image: RgbImage,
    /// `permutation[i]` is the source strip placed at position `i`
    pub permutation: Vec<usize>,
}

/// Shuffled order of `strip_count` strip ids for `seed`
pub fn shuffled_order(strip_count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..strip_count).collect();
    order.shuffle(&mut rng);
    order
}

/// Cut `source` into strips of `strip_width` and shuffle them
///
/// # Errors
///
/// Returns an error if the width is zero or fewer than two strips fit
pub fn shred_image(source: &RgbImage, strip_width: usize, seed: u64) -> Result<Shredded> {
    let strips = partition(source, strip_width)?;
    let permutation = shuffled_order(strips.len(), seed);

    let placed: Vec<Strip> = permutation
        .iter()
        .filter_map(|&id| strips.get(id).copied())
        .collect();

    Ok(Shredded {
        image: render_strips(source, &placed),
        permutation,
    })
}
