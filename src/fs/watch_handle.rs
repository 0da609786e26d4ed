//! Watch session handle and event delivery.

use std::future::Future;

use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::rpc::EventStream;

/// Kind of a reported filesystem change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Entry created
    Create,
    /// Entry contents written
    Write,
    /// Entry removed
    Remove,
    /// Entry renamed
    Rename,
    /// Entry permissions changed
    Chmod,
}

impl EventType {
    /// Create from the wire-level integer type value.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(EventType::Create),
            2 => Some(EventType::Write),
            3 => Some(EventType::Remove),
            4 => Some(EventType::Rename),
            5 => Some(EventType::Chmod),
            _ => None,
        }
    }
}

/// A single change reported for a watched path. Delivered to the
/// session's handler once and not retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemEvent {
    /// Name of the affected entry
    pub name: String,
    /// Kind of change
    #[serde(rename = "type")]
    pub kind: EventType,
}

/// Handle for one active watch session.
///
/// The session ends when [`stop`](WatchHandle::stop) is called, when a
/// configured duration timeout fires, or when the upstream event source
/// ends or fails; all of these converge on the same cancellation token,
/// so teardown happens exactly once. Dropping the handle does not stop
/// the session.
#[derive(Debug)]
pub struct WatchHandle {
    cancel: CancellationToken,
    #[allow(dead_code)]
    task: JoinHandle<()>,
}

impl WatchHandle {
    /// Wrap an established event stream and start delivering its events
    /// to `on_event` on a background task.
    pub(crate) fn new<F, Fut>(cancel: CancellationToken, events: EventStream, on_event: F) -> Self
    where
        F: FnMut(FilesystemEvent) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task = tokio::spawn(deliver(cancel.clone(), events, on_event));
        Self { cancel, task }
    }

    /// Stop the session. Safe to call any number of times, including
    /// after the session has already terminated for another reason.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

/// Consume the event stream, invoking the handler strictly one event at
/// a time. Cancellation is checked first at every iteration, so no
/// event is delivered after the token trips, even if one is already
/// buffered upstream.
async fn deliver<F, Fut>(cancel: CancellationToken, mut events: EventStream, mut on_event: F)
where
    F: FnMut(FilesystemEvent) -> Fut + Send,
    Fut: Future<Output = ()> + Send,
{
    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            item = events.next() => item,
        };

        match next {
            Some(Ok(event)) => on_event(event).await,
            Some(Err(err)) => {
                // Cancellation surfaces through the transport as an
                // error; either way the session just ends.
                if !cancel.is_cancelled() {
                    warn!(error = %err, "watch stream failed");
                }
                break;
            }
            None => {
                debug!("watch stream ended");
                break;
            }
        }
    }

    drop(events);
    cancel.cancel();
}
