//! Mathematical utilities for the algorithm

/// Greatest common divisor helpers used by strip width detection
pub mod divisor;
