use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load run-list configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Run-list validation error: {0}")]
    ValidationError(String),
}
