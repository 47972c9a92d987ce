//! Logger setup for the binaries.
//!
//! The library only talks to the `log` facade; this picks the backend.

use log::LevelFilter;

/// Maps `-v` occurrences to a level filter. INFO is the floor.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a timestamped `pretty_env_logger` at the given verbosity.
///
/// `RUST_LOG`, when set, overrides the level. Calling this twice keeps the
/// first logger.
pub fn init(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(level_for_verbosity(verbose));
    builder.parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("logger already initialized; keeping the existing one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Info);
        assert_eq!(level_for_verbosity(1), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(2), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(1);
    }
}
