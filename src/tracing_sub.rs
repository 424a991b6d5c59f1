use std::fs::File;
use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. The alternate screen owns stdout, so
/// logs go to stderr by default, or to `log_file` when given. Safe to call
/// more than once; later calls are no-ops.
pub fn init(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file.and_then(|path| File::create(path).ok()) {
        Some(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .try_init();
        }
    }
}
