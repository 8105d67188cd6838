use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Env var naming a log file path.
pub const LOG_FILE_ENV: &str = "WATER_LOG";

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr so stdout carries only command output. When `WATER_LOG` is set,
/// output goes to `{WATER_LOG}.{unix_secs}.{pid}` instead.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match std::env::var(LOG_FILE_ENV) {
        Ok(base) => {
            let path = run_log_path(&base);
            match File::create(&path) {
                Ok(file) => registry
                    .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
                    .init(),
                Err(err) => eprintln!("water: cannot create log file {path}: {err}"),
            }
        }
        Err(_) => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .init(),
    }
}

/// One file per run, so parallel invocations never share a log.
fn run_log_path(base: &str) -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    format!("{base}.{secs}.{}", std::process::id())
}
