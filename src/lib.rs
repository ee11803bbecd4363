//! Reconstruction of images cut into equal-width vertical strips and shuffled
//!
//! The strip width is inferred from periodic column discontinuities, every strip
//! ranks all others as candidate left neighbors, and a greedy multi-round
//! matching links strips into chains that are assembled into one order.

#![forbid(unsafe_code)]

/// Neighbor ranking, matching, chain assembly and the pipeline driving them
pub mod algorithm;
/// Column statistics and strip width detection
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for divisor computations
pub mod math;
/// Pixel buffer view and strip partitioning
pub mod spatial;

pub use algorithm::executor::{Reconstruction, ReconstructionConfig, reconstruct};
pub use io::error::{Result, UnshredError};
