use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};
use crate::core::{BillingError, Result};

/// Builds the log filter: `RUST_LOG` when set, otherwise `autobilling=<log_level>`.
pub fn env_filter(app: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("autobilling={}", app.log_level)))
}

/// Install the global tracing subscriber for a hosting application.
///
/// The library itself never calls this. Fails when a global subscriber is
/// already installed.
pub fn init_tracing(app: &AppConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(app));

    let installed = match app.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    installed.map_err(|e| {
        BillingError::configuration(format!("Failed to install tracing subscriber: {}", e))
    })
}
