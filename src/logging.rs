//! Logger setup shared by the binaries.
//!
//! Logs go to stderr so report output on stdout stays byte-for-byte stable.
//! `RUST_LOG`, when set, overrides the verbosity flag.

use log::LevelFilter;

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_default_env();

    // A logger may already be installed when embedded in a larger program
    let _ = builder.try_init();
}
