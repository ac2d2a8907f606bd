/// Error types for discovery-service
///
/// Ranking itself never fails; these cover configuration and snapshot loading.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type alias for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
