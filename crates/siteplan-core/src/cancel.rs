//! Cancellation for polled operations
//!
//! Video synthesis is polled until the remote job resolves; the consuming
//! view may be torn down first. A [`CancelHandle`]/[`CancelSignal`] pair
//! stops the poll loop either explicitly (`cancel()`) or implicitly when
//! the handle is dropped, so teardown can never leave a timer running.

use tokio::sync::watch;

/// Create a linked cancel handle and signal
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// Caller-side handle; fire it — or drop it — to cancel
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Request cancellation
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Poll-side signal awaited inside the polling loop
#[derive(Debug)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Resolve once cancellation is requested or the handle is dropped
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow() {
                return;
            }
            // A dropped handle counts as cancellation: the owning view is
            // gone and nothing will consume the result.
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Non-blocking check
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }
}
