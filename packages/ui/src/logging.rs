//! Platform-aware `tracing` setup.
//!
//! On the web build events go to the browser console through `tracing-web`, at the
//! level stored in `localStorage` when the app starts. Native builds (tests,
//! tooling) log to stdout at INFO.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

/// `localStorage` key holding the web log level.
pub const LOG_LEVEL_KEY: &str = "dashboard_log_level";

static INIT: Once = Once::new();

/// Install the subscriber. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        init_web();
        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        init_native();
    });
}

pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn init_web() {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(log_level())
        .with(fmt_layer)
        .try_init();
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn init_native() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .try_init();
}

/// Level to install: the stored one on the web (WARN if unset or unparsable),
/// INFO natively.
pub fn log_level() -> LevelFilter {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        use store::KeyValueStorage;
        store::LocalStorage::new()
            .get(LOG_LEVEL_KEY)
            .and_then(|raw| parse_level(&raw))
            .unwrap_or(LevelFilter::WARN)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        LevelFilter::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::WARN));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert_eq!(log_level(), LevelFilter::INFO);
    }
}
