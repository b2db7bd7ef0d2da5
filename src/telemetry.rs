//! Logging setup
//!
//! `RUST_LOG` 优先于配置中的日志级别

use thiserror::Error;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// 日志初始化错误
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    InitError(#[from] TryInitError),
}

/// 初始化全局 tracing subscriber
///
/// 重复调用返回错误，不会 panic
pub fn init_logging(config: &LogConfig) -> Result<(), TelemetryError> {
    let log_filter = format!("{},voiceover_store={}", config.level, config.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.json {
        builder.json().finish().try_init()?;
    } else {
        builder.finish().try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let config = LogConfig::default();
        let _ = init_logging(&config);

        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, TelemetryError::InitError(_)));
    }
}
