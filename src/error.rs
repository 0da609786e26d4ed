//! Error types for the sandboxfs library.

use thiserror::Error;

use crate::rpc::RpcCode;

/// Main error type for sandboxfs operations.
#[derive(Error, Debug)]
pub enum FsError {
    /// File channel responded with a non-success HTTP status.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Network request error.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// RPC channel returned a status code.
    #[error("rpc error: {code} - {message}")]
    Rpc { code: RpcCode, message: String },

    /// The effective timeout elapsed before the call completed.
    #[error("request timed out")]
    TimedOut,

    /// Invalid or unexpected response from the host.
    #[error("invalid response from host")]
    InvalidResponse,

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

impl FsError {
    /// Whether this error means the targeted path does not exist on the
    /// host. `exists` folds this case into `false`; every other
    /// operation propagates it unchanged.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FsError::Rpc {
                code: RpcCode::NotFound,
                ..
            }
        )
    }

    /// Build an RPC error from a status code and message.
    pub fn rpc(code: impl Into<RpcCode>, message: impl Into<String>) -> Self {
        FsError::Rpc {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for sandboxfs operations.
pub type Result<T> = std::result::Result<T, FsError>;
