//! Filesystem access layer: single-shot operations and watch sessions.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::config::ConnectionConfig;
use crate::error::{FsError, Result};
use crate::http::HttpClient;
use crate::rpc::{FilesystemRpc, UserSelector};

pub(crate) mod entry;
mod operations;
pub(crate) mod watch_handle;

pub use entry::{EntryInfo, FileType};
pub use operations::transfer::{ByteStream, FileContents, ReadFormat, ReadOpts, WriteData};
pub use operations::watch::WatchOpts;
pub use watch_handle::{EventType, FilesystemEvent, WatchHandle};

/// Per-call options shared by every single-shot operation.
#[derive(Debug, Clone, Default)]
pub struct RequestOpts {
    /// Acting username; falls back to the connection default.
    pub user: Option<String>,
    /// Per-call timeout; falls back to the connection default. Zero
    /// disables enforcement.
    pub request_timeout: Option<Duration>,
}

/// Client for a sandboxed host's remote filesystem.
///
/// Directory and metadata operations go over the streaming RPC channel;
/// bulk file contents go over the HTTP file-transfer channel. Watch
/// sessions wrap the RPC channel's change notification stream.
pub struct Filesystem {
    rpc: Arc<dyn FilesystemRpc>,
    http: HttpClient,
    config: ConnectionConfig,
}

impl Filesystem {
    /// Create a filesystem client from an RPC channel and connection
    /// configuration. The HTTP file channel is derived from
    /// `config.api_url`.
    pub fn new(rpc: Arc<dyn FilesystemRpc>, config: ConnectionConfig) -> Self {
        Self {
            rpc,
            http: HttpClient::new(),
            config,
        }
    }

    /// Connection configuration this client was built with.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub(crate) fn user_selector(&self, call_override: Option<&str>) -> UserSelector {
        UserSelector::username(self.config.resolve_user(call_override))
    }

    /// URL of the file-transfer endpoint for one path and acting user.
    pub(crate) fn file_url(&self, path: &str, user: Option<&str>) -> Result<Url> {
        let base = format!("{}/files", self.config.api_url.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[("path", path), ("username", self.config.resolve_user(user))],
        )
        .map_err(|err| FsError::Custom(format!("invalid file URL: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::testing::FakeRpc;

    fn filesystem() -> Filesystem {
        Filesystem::new(
            Arc::new(FakeRpc::default()),
            ConnectionConfig::new("http://127.0.0.1:4000/"),
        )
    }

    #[test]
    fn test_file_url_carries_path_and_username() {
        let fs = filesystem();
        let url = fs.file_url("/tmp/a b.txt", None).unwrap();

        assert_eq!(url.path(), "/files");
        let query = url.query().unwrap();
        assert!(query.contains("path=%2Ftmp%2Fa+b.txt"));
        assert!(query.contains("username=user"));
    }

    #[test]
    fn test_file_url_user_override() {
        let fs = filesystem();
        let url = fs.file_url("/etc/hosts", Some("root")).unwrap();
        assert!(url.query().unwrap().contains("username=root"));
    }

    #[test]
    fn test_user_selector_resolution() {
        let fs = filesystem();
        assert_eq!(fs.user_selector(None).username, "user");
        assert_eq!(fs.user_selector(Some("admin")).username, "admin");
    }
}
