use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise `warn`, or
/// `info` with `--verbose`. Stdout stays reserved for the completion line.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
