//! Environment-driven configuration for the demo binary.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use satchel_analytics::{Transaction, fixture, load_transactions};
use satchel_core::DomainError;
use satchel_observability::{LogFormat, UnknownLogFormat};

pub const LOG_FORMAT_VAR: &str = "SATCHEL_LOG_FORMAT";
pub const TRANSACTIONS_VAR: &str = "SATCHEL_TRANSACTIONS";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    /// Set when the configured format was not recognized and the default was used.
    pub log_format_error: Option<UnknownLogFormat>,
    /// JSON file with transaction records; `None` means the built-in sample.
    pub transactions_path: Option<PathBuf>,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// An unrecognized log format falls back to the default; the parse error
    /// is kept for [`DemoConfig::warn_on_fallbacks`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = lookup(LOG_FORMAT_VAR).map(|raw| raw.parse::<LogFormat>());
        let (log_format, log_format_error) = match parsed {
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::default(), Some(err)),
            None => (LogFormat::default(), None),
        };

        let transactions_path = lookup(TRANSACTIONS_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_format,
            log_format_error,
            transactions_path,
        }
    }

    /// Log any settings that were replaced by defaults. Call after tracing is up.
    pub fn warn_on_fallbacks(&self) {
        if let Some(err) = &self.log_format_error {
            tracing::warn!(%err, "using default log format");
        }
    }

    /// Load transactions from the configured file, or the sample when unset.
    pub fn load_transactions(&self) -> anyhow::Result<Vec<Transaction>> {
        let Some(path) = &self.transactions_path else {
            tracing::info!("no {TRANSACTIONS_VAR} set; using built-in sample");
            return Ok(fixture());
        };

        let raw = std::fs::read_to_string(path)
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => {
                    anyhow::Error::new(DomainError::not_found(path.display().to_string()))
                }
                _ => anyhow::Error::new(err),
            })
            .with_context(|| format!("reading transactions from {}", path.display()))?;

        let txs = load_transactions(&raw)
            .with_context(|| format!("parsing transactions from {}", path.display()))?;
        tracing::info!(path = %path.display(), count = txs.len(), "transactions loaded from file");
        Ok(txs)
    }
}
