//! Logger installation.
//!
//! Everything logs through the `log` facade. In the browser records go to
//! the developer console; natively they go through `env_logger`.

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum level emitted.
    pub level: LevelFilter,
    /// `env_logger` filter string (e.g. "webgl_triangle=debug"). Native only;
    /// takes precedence over `RUST_LOG` and `level`.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: LevelFilter) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once.
///
/// Subsequent calls are ignored, including their level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    if log::set_logger(&console::LOGGER).is_ok() {
        log::set_max_level(config.level);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(config.level);
    }

    // Another logger (e.g. a test harness) may already be installed.
    let _ = builder.try_init();
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    /// Routes records to `console.error` / `warn` / `log` / `debug`.
    pub(super) struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record<'_>) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let message = JsValue::from_str(&record.args().to_string());
            match record.level() {
                Level::Error => web_sys::console::error_1(&message),
                Level::Warn => web_sys::console::warn_1(&message),
                Level::Info => web_sys::console::log_1(&message),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
            }
        }

        fn flush(&self) {}
    }
}
