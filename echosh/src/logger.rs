// echosh/src/logger.rs
//! Logger bootstrap for the CLI.

use log::LevelFilter;

/// Initializes the global logger. An explicit level overrides `RUST_LOG`;
/// repeated calls are harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp_secs().try_init();
}
