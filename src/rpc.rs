//! Streaming RPC channel interface for filesystem operations.
//!
//! The host exposes directory and metadata operations, plus a change
//! notification stream, over an RPC service. The generated stub lives
//! outside this crate; [`FilesystemRpc`] is the narrow surface the
//! filesystem layer consumes, and [`RpcCode`] mirrors the status-code
//! space the service speaks.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::fs::{EntryInfo, FilesystemEvent};

/// RPC status codes returned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcCode {
    /// Call cancelled by the caller
    Canceled = 1,
    /// Unknown error
    Unknown = 2,
    /// Invalid arguments
    InvalidArgument = 3,
    /// Deadline expired before completion
    DeadlineExceeded = 4,
    /// Resource does not exist
    NotFound = 5,
    /// Resource already exists
    AlreadyExists = 6,
    /// Permission denied
    PermissionDenied = 7,
    /// Resource exhausted
    ResourceExhausted = 8,
    /// Precondition failed
    FailedPrecondition = 9,
    /// Operation aborted
    Aborted = 10,
    /// Out of range
    OutOfRange = 11,
    /// Operation not implemented
    Unimplemented = 12,
    /// Internal error
    Internal = 13,
    /// Service unavailable
    Unavailable = 14,
    /// Unrecoverable data loss
    DataLoss = 15,
    /// Missing or invalid authentication
    Unauthenticated = 16,
}

impl From<i32> for RpcCode {
    fn from(code: i32) -> Self {
        match code {
            1 => RpcCode::Canceled,
            2 => RpcCode::Unknown,
            3 => RpcCode::InvalidArgument,
            4 => RpcCode::DeadlineExceeded,
            5 => RpcCode::NotFound,
            6 => RpcCode::AlreadyExists,
            7 => RpcCode::PermissionDenied,
            8 => RpcCode::ResourceExhausted,
            9 => RpcCode::FailedPrecondition,
            10 => RpcCode::Aborted,
            11 => RpcCode::OutOfRange,
            12 => RpcCode::Unimplemented,
            13 => RpcCode::Internal,
            14 => RpcCode::Unavailable,
            15 => RpcCode::DataLoss,
            16 => RpcCode::Unauthenticated,
            _ => RpcCode::Unknown,
        }
    }
}

impl RpcCode {
    /// Get human-readable description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            RpcCode::Canceled => "Call cancelled",
            RpcCode::Unknown => "Unknown error",
            RpcCode::InvalidArgument => "Invalid arguments",
            RpcCode::DeadlineExceeded => "Deadline exceeded",
            RpcCode::NotFound => "Resource does not exist",
            RpcCode::AlreadyExists => "Resource already exists",
            RpcCode::PermissionDenied => "Permission denied",
            RpcCode::ResourceExhausted => "Resource exhausted",
            RpcCode::FailedPrecondition => "Precondition failed",
            RpcCode::Aborted => "Operation aborted",
            RpcCode::OutOfRange => "Out of range",
            RpcCode::Unimplemented => "Not implemented",
            RpcCode::Internal => "Internal error",
            RpcCode::Unavailable => "Service unavailable",
            RpcCode::DataLoss => "Data loss",
            RpcCode::Unauthenticated => "Unauthenticated",
        }
    }
}

impl std::fmt::Display for RpcCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Identifies the acting user for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSelector {
    pub username: String,
}

impl UserSelector {
    pub fn username(name: impl Into<String>) -> Self {
        Self {
            username: name.into(),
        }
    }
}

/// Request payload for `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    pub path: String,
    pub user: UserSelector,
}

/// Request payload for `make_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeDirRequest {
    pub path: String,
    pub user: UserSelector,
}

/// Request payload for `remove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub path: String,
    pub user: UserSelector,
}

/// Request payload for `stat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRequest {
    pub path: String,
    pub user: UserSelector,
}

/// Request payload for `rename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: String,
    pub destination: String,
    pub user: UserSelector,
}

/// Request payload for `watch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchRequest {
    pub path: String,
    pub user: UserSelector,
}

/// Continuous, cancellable sequence of change events for one watched
/// path. The stream ends when the subscription closes; transport
/// failures surface as `Err` items.
pub type EventStream = BoxStream<'static, Result<FilesystemEvent>>;

/// RPC client surface consumed by [`crate::fs::Filesystem`].
///
/// Single-shot calls are aborted by dropping the in-flight future;
/// `watch` takes the session's cancellation token explicitly because
/// its lifetime extends past establishment.
#[async_trait]
pub trait FilesystemRpc: Send + Sync {
    /// Entries directly under a path, in host-reported order.
    async fn list(&self, request: ListRequest) -> Result<Vec<EntryInfo>>;

    /// Create a directory, including missing intermediate directories.
    async fn make_dir(&self, request: MakeDirRequest) -> Result<()>;

    /// Delete a file or directory (recursively for directories).
    async fn remove(&self, request: RemoveRequest) -> Result<()>;

    /// Metadata for a single path.
    async fn stat(&self, request: StatRequest) -> Result<EntryInfo>;

    /// Move or rename an entry; returns it at its new location.
    async fn rename(&self, request: MoveRequest) -> Result<EntryInfo>;

    /// Open a change notification stream for a path. Cancelling the
    /// token must abort establishment promptly and end an established
    /// stream.
    async fn watch(&self, request: WatchRequest, cancel: CancellationToken)
        -> Result<EventStream>;
}
