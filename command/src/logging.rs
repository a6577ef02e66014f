use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// installs the global subscriber. Diagnostics go to stderr, filtered with RUST_LOG,
/// so the migration report on stdout stays readable.
pub(crate) fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
