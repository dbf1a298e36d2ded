use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "VARIANT_VENN_LOG";
const DEFAULT_FILTER: &str = "variant_venn=info";

static INIT: Once = Once::new();

/// Installs the stderr subscriber. Levels come from `VARIANT_VENN_LOG`
/// (e.g. `VARIANT_VENN_LOG=variant_venn=debug`), falling back to
/// `variant_venn=info`. Safe to call more than once.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .try_init();
    });
}
