//! Tracing setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::shared::errors::ConfigError;

/// Initialize tracing (logging) from the logging config.
///
/// `RUST_LOG` takes precedence over `config.level`. Call this once at process
/// startup; a second call fails with [`ConfigError::Tracing`].
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.to_lowercase().as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    result.map_err(|e| ConfigError::Tracing(e.to_string()))
}

