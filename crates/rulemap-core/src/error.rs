use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulemapError {
    #[error("file not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid section code: {0}")]
    InvalidSection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RulemapError>;
