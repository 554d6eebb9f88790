pub mod build_info;

use std::sync::Once;
use std::time::Instant;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finance_core=info"));

        // another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    });
}

/// Runs `block` and logs how long it took under `label`.
pub fn timed<T>(label: &str, block: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let result = block();
    let elapsed = started.elapsed();
    tracing::info!(
        block = label,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "timed block finished"
    );
    result
}
