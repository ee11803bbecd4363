//! Column statistics used to infer strip geometry

/// Normalized column difference scores
pub mod columns;
/// Strip width detection with the GCD heuristic
pub mod width;
