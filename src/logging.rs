use std::fs::File;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file path.
pub const LOG_FILE_ENV: &str = "BOARD_CLIENT_LOG";

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG` (default `info`). Logs go to stderr
/// unless `BOARD_CLIENT_LOG` names a file path, in which case they are
/// written to `{path}.{timestamp}.{pid}` so concurrent runs don't collide.
/// If that file can't be created, logging stays on stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some((unique_path, file)) = std::env::var(LOG_FILE_ENV).ok().and_then(|p| open_log_file(&p))
    else {
        init_stderr(filter);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::debug!(path = %unique_path, "Logging to file");
}

fn init_stderr(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Create `{base}.{timestamp}.{pid}`, returning its path and handle.
fn open_log_file(base: &str) -> Option<(String, File)> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", base, timestamp, pid);

    match File::create(&unique_path) {
        Ok(file) => Some((unique_path, file)),
        Err(e) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}; logging to stderr",
                unique_path, e
            );
            None
        }
    }
}
