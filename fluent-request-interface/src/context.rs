use std::future::pending;
use std::time::{Duration, Instant};

use tokio::sync::watch;

use crate::Error;

/// A cancellation and deadline scope carried by a request.
///
/// The default context is the background context: it is never cancelled and has no deadline.
/// Contexts are cheap to clone; clones observe the same cancellation signal.
///
/// The facade never enforces a context itself. Backends race their I/O against
/// [`Context::done`] and report [`Error::Cancelled`] or [`Error::DeadlineExceeded`].
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// The cancelling side of a [`Context`] created by [`Context::with_cancel`].
///
/// Dropping the handle without calling [`CancelHandle::cancel`] leaves the context alive.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Creates a cancellable context and the handle that cancels it.
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            cancelled: Some(rx),
            deadline: None,
        };
        (ctx, CancelHandle { tx })
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline_at(Instant::now() + timeout)
    }

    /// Narrows the deadline of this context to `deadline`. An earlier existing deadline wins.
    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// The deadline of this context, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if this context can never end.
    pub fn is_background(&self) -> bool {
        self.cancelled.is_none() && self.deadline.is_none()
    }

    /// The reason this context has ended, or `None` while it is still live.
    pub fn err(&self) -> Option<Error> {
        if self.cancelled.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(Error::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(Error::DeadlineExceeded);
        }
        None
    }

    /// Resolves once the context is cancelled or its deadline passes, yielding the matching
    /// error. Never resolves for the background context.
    ///
    /// Requires a tokio runtime with the time driver enabled when a deadline is set.
    pub async fn done(&self) -> Error {
        let cancelled = async {
            match self.cancelled.clone() {
                Some(mut rx) => {
                    let closed = rx.wait_for(|c| *c).await.is_err();
                    if closed {
                        // handle dropped without cancelling
                        pending::<()>().await;
                    }
                }
                None => pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(d) => tokio::time::sleep_until(d.into()).await,
                None => pending::<()>().await,
            }
        };
        tokio::select! {
            biased;
            _ = cancelled => Error::Cancelled,
            _ = expired => Error::DeadlineExceeded,
        }
    }
}

impl CancelHandle {
    /// Cancels the associated context and all of its clones.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}
