use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default `calculate=warn`. Logs go to stderr;
/// stdout carries nothing but the result line.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "calculate=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
