use homegrid::{ConfigError, PlacementError, SnapshotError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("write failed: {0}")]
    Storage(#[from] StorageError),

    #[error("invalid layout: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Placement(_) => 2,
            Self::Config(_) | Self::Snapshot(_) => 3,
            Self::InvalidArgument { .. } => 64,
            Self::Io(_) | Self::Json(_) | Self::Storage(_) => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
