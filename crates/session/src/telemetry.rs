use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a `fmt` subscriber for native tools and tests.
///
/// The Dioxus launcher installs its own subscriber, so the app never calls
/// this. `RUST_LOG` wins over the default filter. Safe to call repeatedly.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,session=debug,audit=warn"));
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_err()
        {
            tracing::debug!("tracing subscriber already installed");
        }
    });
}
