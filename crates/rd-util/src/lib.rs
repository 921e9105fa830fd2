use std::{env, io::IsTerminal};

use tracing::{subscriber::SetGlobalDefaultError, Level};
use tracing_subscriber::FmtSubscriber;

pub fn parse_level(s: &str) -> Option<Level> {
    match s {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

// RUST_LOG wins over the configured level, anything unrecognised falls back to info
pub fn resolve_level(env_level: Option<&str>, config_level: Option<&str>) -> Level {
    env_level
        .and_then(parse_level)
        .or_else(|| config_level.and_then(parse_level))
        .unwrap_or(Level::INFO)
}

/// Installs the global subscriber. Events go to stderr, stdout is left to
/// whatever the binary prints as its result.
pub fn init_tracing(config_level: Option<&str>) -> Result<(), SetGlobalDefaultError> {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_source_location(true)
        .compact();

    let env_level = env::var("RUST_LOG").ok();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(resolve_level(env_level.as_deref(), config_level))
        .with_writer(std::io::stderr)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
