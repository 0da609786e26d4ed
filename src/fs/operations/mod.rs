//! Filesystem operations split into focused modules.

use std::future::Future;
use std::time::Duration;

use crate::error::{FsError, Result};

mod dir_ops;
pub(crate) mod transfer;
pub(crate) mod watch;

/// Enforce an effective timeout on a single-shot call. A zero limit
/// means no enforcement. Dropping the future on expiry aborts the
/// in-flight transport work.
pub(crate) async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if limit.is_zero() {
        return fut.await;
    }

    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(FsError::TimedOut),
    }
}
