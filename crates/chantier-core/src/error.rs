use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChantierError {
    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("Locale not found in catalog: {locale}")]
    LocaleNotFound { locale: String },

    #[error("Catalog directory does not exist: {path}")]
    CatalogDirNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSer(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChantierError>;

impl ChantierError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigKeyNotFound { .. } => 2,
            Self::InvalidConfigValue { .. } => 3,
            Self::LocaleNotFound { .. } => 4,
            Self::CatalogDirNotFound { .. } => 5,
            Self::Json { .. } | Self::JsonSer(_) => 6,
            _ => 1,
        }
    }
}
