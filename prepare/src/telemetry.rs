use std::io::{self, IsTerminal};
use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

static TELEMETRY_GUARD: OnceLock<()> = OnceLock::new();

/// ошибки настройки логирования
#[derive(Debug, Error)]
pub enum TelemetryError
{
    /// некорректный фильтр
    #[error("некорректный фильтр логирования: {0}")]
    Filter(String),
    /// не удалось установить подписчика
    #[error("не удалось установить подписчика tracing: {0}")]
    Subscriber(String),
}

/// настраиваем вывод логов в stderr, повторные вызовы ничего не меняют
///
/// фильтр из RUST_LOG, если он задан, иначе - переданный
pub fn initialise(default_filter: &str) -> Result<(), TelemetryError>
{
    if TELEMETRY_GUARD.get().is_some() {
        return Ok(());
    }

    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.is_empty() => EnvFilter::try_new(value),
        _ => EnvFilter::try_new(default_filter),
    }
    .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init()
        .map_err(|error| TelemetryError::Subscriber(error.to_string()))?;

    let _ = TELEMETRY_GUARD.set(());

    Ok(())
}
