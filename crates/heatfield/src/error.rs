use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatSealError>;

/// Errors raised while loading, saving or validating configuration
#[derive(Error, Debug)]
pub enum HeatSealError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
