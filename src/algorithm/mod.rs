/// Compact strip id sets backed by a bit vector
pub mod bitset;
/// Reconstruction pipeline orchestration
pub mod executor;
/// Chain assembly into a single left-to-right order
pub mod linearize;
/// Greedy multi-round right-neighbor matching
pub mod matching;
/// All-pairs left-neighbor candidate ranking
pub mod ranking;
