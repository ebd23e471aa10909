use thiserror::Error;

use passgen::{GenerationError, SettingsError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Generation(#[from] GenerationError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("Random source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("Failed to write passwords: {0}")]
    Output(#[from] std::io::Error),
}
