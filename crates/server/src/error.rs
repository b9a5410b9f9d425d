use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to serialize authorization data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to replace {path}: {source}")]
    Replace {
        path: String,
        source: std::io::Error,
    },
}
