/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Image loading, strip composition and PNG export
pub mod image;
/// Logger setup for the command-line front end
pub mod logging;
/// Multi-file progress display
pub mod progress;
/// Seeded shredding of intact images
pub mod shred;
