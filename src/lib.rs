//! # sandboxfs
//!
//! Rust client library for a sandboxed execution host's filesystem.
//!
//! ## Features
//!
//! - **Filesystem Operations**:
//!   - List directory entries (`list`).
//!   - Create directories with intermediate components (`make_dir`).
//!   - Delete files and directories (`remove`).
//!   - Probe and fetch entry metadata (`exists`, `stat`).
//!   - Move and rename entries (`rename`).
//! - **File Transfers**:
//!   - Read file contents as text, bytes, an opaque blob, or a byte
//!     stream (`read`).
//!   - Write text, buffers, blobs, or streams as a multipart upload
//!     (`write`).
//! - **Change Notification**:
//!   - Watch a path for changes with strictly sequential event
//!     delivery and a stoppable session handle (`watch`).
//!
//! Every operation resolves a per-call timeout against the connection
//! default and identifies the acting user via an optional override.
//! Directory, metadata, and watch operations run over the host's RPC
//! channel (provided as a [`rpc::FilesystemRpc`] implementation); bulk
//! file contents go over the host's HTTP file API.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sandboxfs::{ConnectionConfig, Filesystem, RequestOpts, WatchOpts};
//!
//! # async fn example(rpc: Arc<dyn sandboxfs::rpc::FilesystemRpc>) -> sandboxfs::Result<()> {
//! let fs = Filesystem::new(rpc, ConnectionConfig::new("https://host.example/api"));
//!
//! fs.write("/tmp/hello.txt", "hello", &RequestOpts::default()).await?;
//!
//! let entries = fs.list("/tmp", &RequestOpts::default()).await?;
//! for entry in entries {
//!     println!("{} ({:?})", entry.name, entry.kind);
//! }
//!
//! let handle = fs
//!     .watch(
//!         "/tmp",
//!         |event| async move { println!("{}: {:?}", event.name, event.kind) },
//!         &WatchOpts::default(),
//!     )
//!     .await?;
//!
//! // ... later
//! handle.stop();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod http;
pub mod rpc;

// Re-export commonly used types
pub use config::{ConnectionConfig, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USERNAME};
pub use error::{FsError, Result};
pub use fs::{
    ByteStream, EntryInfo, EventType, FileContents, FileType, Filesystem, FilesystemEvent,
    ReadFormat, ReadOpts, RequestOpts, WatchHandle, WatchOpts, WriteData,
};
pub use rpc::{EventStream, FilesystemRpc, RpcCode};
