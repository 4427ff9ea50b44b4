//! Error types for wallet-session

use thiserror::Error;

use crate::types::WalletKind;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Session error types
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{0} is not installed")]
    ProviderAbsent(WalletKind),

    #[error("Connection request was rejected")]
    UserRejected,

    #[error("Provider request failed: {0}")]
    ProviderQueryFailed(String),

    #[error("Unsupported wallet kind: {0}")]
    UnsupportedWallet(String),

    #[error("No wallet is connected")]
    NotConnected,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
