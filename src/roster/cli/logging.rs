use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ROSTER_LOG";

/// Installs the stderr subscriber. `ROSTER_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
