use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

// Initialize the tracing subscriber with default configuration.
// Opt-in: consuming binaries (and the test harness) call this once.
pub fn init_tracing() {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "api_response=info".parse().unwrap());

    // try_init so repeated calls (one per test binary entry) are harmless
    let _ = fmt().with_env_filter(env_filter).try_init();
}
