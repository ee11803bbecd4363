//! Logger setup for the command-line front end

use log::LevelFilter;

/// Log level for the given `-v` count, or warnings only when quiet
pub const fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// `RUST_LOG` takes precedence over the level derived from the flags.
/// Returns `false` if a logger was already installed.
pub fn init_logging(verbosity: u8, quiet: bool) -> bool {
    env_logger::Builder::new()
        .filter_level(level_filter(verbosity, quiet))
        .format_timestamp(None)
        .parse_default_env()
        .try_init()
        .is_ok()
}
