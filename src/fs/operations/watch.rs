//! Watch session establishment.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{FsError, Result};
use crate::fs::{Filesystem, FilesystemEvent, WatchHandle};
use crate::rpc::WatchRequest;

/// Per-call options for [`Filesystem::watch`].
#[derive(Debug, Clone, Default)]
pub struct WatchOpts {
    /// Acting username; falls back to the connection default.
    pub user: Option<String>,
    /// Timeout for establishing the subscription; falls back to the
    /// connection default.
    pub request_timeout: Option<Duration>,
    /// Overall bound on how long the session stays active after
    /// establishment. Defaults to the effective request timeout; zero
    /// disables the bound.
    pub duration: Option<Duration>,
}

impl Filesystem {
    /// Watch `path` for filesystem changes, invoking `on_event` for
    /// each reported change.
    ///
    /// Events are delivered strictly one at a time: the next event is
    /// not consumed until the handler's future for the current one
    /// completes. The returned handle's `stop` ends the session; so do
    /// the duration timeout and the upstream stream ending or failing,
    /// all silently. Only establishment failures are reported here.
    pub async fn watch<F, Fut>(
        &self,
        path: &str,
        on_event: F,
        opts: &WatchOpts,
    ) -> Result<WatchHandle>
    where
        F: FnMut(FilesystemEvent) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let request_timeout = self.config().effective_timeout(opts.request_timeout);

        // One cancellation switch for the whole session: the setup
        // timer, the duration timer, and the handle's stop all trip it.
        let cancel = CancellationToken::new();

        let setup_timer = arm_cancel_timer(&cancel, request_timeout);

        let request = WatchRequest {
            path: path.to_string(),
            user: self.user_selector(opts.user.as_deref()),
        };
        let established = self.rpc.watch(request, cancel.clone()).await;

        // The setup timer bounds establishment only; it must not fire
        // once the stream exists.
        if let Some(timer) = setup_timer {
            timer.abort();
        }

        let events = match established {
            Ok(events) => events,
            Err(_) if cancel.is_cancelled() => return Err(FsError::TimedOut),
            Err(err) => {
                cancel.cancel();
                return Err(err);
            }
        };
        debug!(path, "watch stream established");

        let duration = opts.duration.unwrap_or(request_timeout);
        arm_cancel_timer(&cancel, duration);

        Ok(WatchHandle::new(cancel, events, on_event))
    }
}

/// Trip the token after `after`, unless the session ends first. A zero
/// interval arms nothing.
fn arm_cancel_timer(cancel: &CancellationToken, after: Duration) -> Option<JoinHandle<()>> {
    if after.is_zero() {
        return None;
    }

    let token = cancel.clone();
    Some(tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(after) => token.cancel(),
            _ = token.cancelled() => {}
        }
    }))
}
