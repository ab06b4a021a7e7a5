use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Operation(#[from] coho_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;
