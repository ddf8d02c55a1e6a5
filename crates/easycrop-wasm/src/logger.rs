//! Browser console backend for the `log` facade.
//!
//! The core crate only emits `log` records. This module routes them to
//! `console.error`/`warn`/`info`/`debug` so they show up in devtools.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger (first call only) and set the level.
pub(crate) fn init_logging(level: LevelFilter) {
    // Already installed on repeat calls; only the level changes.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("Unknown log level: {}", level))
}

/// Change console log verbosity.
///
/// # Arguments
///
/// * `level` - One of `off`, `error`, `warn`, `info`, `debug`, `trace`
///   (case-insensitive)
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Show which branch the crop size solver takes
/// setLogLevel('trace');
/// ```
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_level(level).map_err(|e| JsValue::from_str(&e))?;
    init_logging(filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Ok(LevelFilter::Trace));
        assert_eq!(parse_level("WARN"), Ok(LevelFilter::Warn));
        assert_eq!(parse_level(" off "), Ok(LevelFilter::Off));
        assert_eq!(
            parse_level("loud"),
            Err("Unknown log level: loud".to_string())
        );
    }

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(
                &Record::builder()
                    .args(format_args!("pan restricted"))
                    .level(Level::Debug)
                    .target("easycrop_core::geometry")
                    .build()
            ),
            "[DEBUG] easycrop_core::geometry: pan restricted"
        );
    }
}
