//! Tracing initialization with file-based log output.
//!
//! The Zellij WASM runtime gives plugins no usable stderr, so log lines go
//! to a file in the plugin's sandbox data directory instead:
//! `~/.local/share/zellij/zitemizer/zitemizer.log` in the usual setup.
//!
//! Level resolution: `RUST_LOG` wins when set, then the `trace_level`
//! plugin configuration option, then `"info"`. Logging is strictly
//! optional; any failure to set it up leaves the plugin running unlogged
//! rather than failing the load.

use crate::infrastructure::paths;
use crate::Config;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file size that triggers rotation on startup (5 MB).
const MAX_LOG_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Initializes the tracing subscriber with file output.
///
/// Idempotent: only the first successful call installs a subscriber; later
/// calls are ignored by `try_init`.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join("zitemizer.log");
    rotate_if_oversized(&log_path);

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Moves an oversized log aside so the file cannot grow without bound.
///
/// One rotation generation is kept (`zitemizer.log.1`); rotation failures
/// are ignored for the same reason all logging failures are.
fn rotate_if_oversized(path: &Path) {
    if let Ok(metadata) = std::fs::metadata(path) {
        if metadata.len() > MAX_LOG_SIZE_BYTES {
            let _ = std::fs::rename(path, path.with_extension("log.1"));
        }
    }
}
