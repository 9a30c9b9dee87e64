use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "CINEMA_SPHERE_LOG";

/// Initialize tracing with file output.
///
/// The TUI owns stdout, so logs only ever go to a file: `log_file` if given,
/// else the path in `CINEMA_SPHERE_LOG`. With neither, logging stays off.
/// The level comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(log_file: Option<&Path>) {
    let Some(path) = resolve_log_path(log_file, std::env::var(LOG_ENV).ok()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        eprintln!("Warning: Failed to open log file: {}", path.display());
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
}

fn resolve_log_path(flag: Option<&Path>, env: Option<String>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}
