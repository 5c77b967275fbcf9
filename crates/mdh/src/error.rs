//! CLI error types.

use mdh_config::ConfigError;
use mdh_site::SiteError;
use mdh_tools::{BudgetError, EmailError, NavigationError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Navigation(#[from] NavigationError),

    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("{0}")]
    Budget(#[from] BudgetError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
