//! Algorithm constants and runtime configuration defaults

// Strip width detection
/// Number of extra boundaries folded into the width divisor beyond the strongest one
pub const DEFAULT_PROBE_DEPTH: usize = 3;

// Neighbor matching
/// Number of matching rounds over ranked left-neighbor candidates
pub const DEFAULT_RANK_DEPTH: usize = 3;

/// Smallest strip width the width heuristic will report
pub const MIN_STRIP_WIDTH: usize = 2;

/// Smallest number of strips a reconstruction can order
pub const MIN_STRIP_COUNT: usize = 2;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible shredding
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to reconstructed output filenames
pub const OUTPUT_SUFFIX: &str = "_unshredded";
/// Suffix added to shredded output filenames
pub const SHRED_SUFFIX: &str = "_shredded";
/// Extension of files picked up when the target is a directory
pub const INPUT_EXTENSION: &str = "png";
