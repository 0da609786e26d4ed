//! Directory and metadata operations over the RPC channel.

use super::with_timeout;
use crate::error::Result;
use crate::fs::{EntryInfo, Filesystem, RequestOpts};
use crate::rpc::{ListRequest, MakeDirRequest, MoveRequest, RemoveRequest, StatRequest};

impl Filesystem {
    /// List the entries directly under `path`, in the order the host
    /// reports them.
    pub async fn list(&self, path: &str, opts: &RequestOpts) -> Result<Vec<EntryInfo>> {
        let limit = self.config().effective_timeout(opts.request_timeout);
        let request = ListRequest {
            path: path.to_string(),
            user: self.user_selector(opts.user.as_deref()),
        };

        with_timeout(limit, self.rpc.list(request)).await
    }

    /// Create a directory at `path`, including any missing intermediate
    /// directories.
    pub async fn make_dir(&self, path: &str, opts: &RequestOpts) -> Result<()> {
        let limit = self.config().effective_timeout(opts.request_timeout);
        let request = MakeDirRequest {
            path: path.to_string(),
            user: self.user_selector(opts.user.as_deref()),
        };

        with_timeout(limit, self.rpc.make_dir(request)).await
    }

    /// Delete the file or directory at `path`. Directories are removed
    /// recursively.
    pub async fn remove(&self, path: &str, opts: &RequestOpts) -> Result<()> {
        let limit = self.config().effective_timeout(opts.request_timeout);
        let request = RemoveRequest {
            path: path.to_string(),
            user: self.user_selector(opts.user.as_deref()),
        };

        with_timeout(limit, self.rpc.remove(request)).await
    }

    /// Metadata for the entry at `path`.
    pub async fn stat(&self, path: &str, opts: &RequestOpts) -> Result<EntryInfo> {
        let limit = self.config().effective_timeout(opts.request_timeout);
        let request = StatRequest {
            path: path.to_string(),
            user: self.user_selector(opts.user.as_deref()),
        };

        with_timeout(limit, self.rpc.stat(request)).await
    }

    /// Move or rename the entry at `old_path` to `new_path`; returns
    /// its metadata at the new location.
    pub async fn rename(
        &self,
        old_path: &str,
        new_path: &str,
        opts: &RequestOpts,
    ) -> Result<EntryInfo> {
        let limit = self.config().effective_timeout(opts.request_timeout);
        let request = MoveRequest {
            source: old_path.to_string(),
            destination: new_path.to_string(),
            user: self.user_selector(opts.user.as_deref()),
        };

        with_timeout(limit, self.rpc.rename(request)).await
    }

    /// Check whether `path` exists. A not-found answer from the host is
    /// a normal `false`; any other failure is re-raised unchanged.
    pub async fn exists(&self, path: &str, opts: &RequestOpts) -> Result<bool> {
        match self.stat(path, opts).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
