//! # Application State
//!
//! Shared state passed to every handler through the `State` extractor. The
//! dataset is loaded once at startup and never mutated, so handlers share
//! it through an `Arc` without locking.

use std::path::PathBuf;
use std::sync::Arc;

use pmx_matrix::{Dataset, LoadError};

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen port (`PORT`, default 8080).
    pub port: u16,
    /// Dataset file (`PMX_DATASET`); `None` serves the embedded sample.
    pub dataset_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            dataset_path: None,
        }
    }
}

impl AppConfig {
    /// Build from `PORT` and `PMX_DATASET`. Unparseable ports fall back to
    /// the default.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("PMX_DATASET").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, dataset: Option<&str>) -> Self {
        let default = Self::default();
        Self {
            port: port.and_then(|p| p.trim().parse().ok()).unwrap_or(default.port),
            dataset_path: dataset
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: AppConfig,
}

impl AppState {
    /// Default configuration serving the embedded sample.
    pub fn new() -> Self {
        Self::with_dataset(AppConfig::default(), Dataset::sample())
    }

    pub fn with_dataset(config: AppConfig, dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config,
        }
    }

    /// Load the configured dataset, or the sample when none is configured.
    pub fn from_config(config: AppConfig) -> Result<Self, LoadError> {
        let dataset = match &config.dataset_path {
            Some(path) => pmx_matrix::from_path(path)?,
            None => Dataset::sample(),
        };
        Ok(Self::with_dataset(config, dataset))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
