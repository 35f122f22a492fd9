use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "JSONREC_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs go to stderr; stdout carries only operation output.
pub fn get_subscriber(env_filter: EnvFilter) -> impl Subscriber + Send + Sync {
    Registry::default().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    )
}

pub fn init(verbose: bool) {
    if let Err(e) = set_global_default(get_subscriber(env_filter(verbose))) {
        eprintln!("Warning: Failed to initialise logging: {}", e);
    }
}
