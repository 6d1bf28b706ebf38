//! Cancellable page loads.
//!
//! A page load is one fetch-then-decode sequence. Wrapping it in a
//! [`LoadHandle`] ties its lifetime to the consumer: when the user
//! navigates away and the handle is dropped, the in-flight request is
//! aborted instead of leaking until the backend answers.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::api::ApiError;

/// Handle to a page load running on the runtime.
///
/// Dropping the handle aborts the load.
#[derive(Debug)]
pub struct LoadHandle<T> {
    handle: JoinHandle<Result<T, ApiError>>,
}

impl<T: Send + 'static> LoadHandle<T> {
    /// Spawn the load onto the runtime.
    pub fn spawn<F>(load: F) -> Self
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(load),
        }
    }

    /// Abort the load; a subsequent [`join`](Self::join) reports
    /// [`ApiError::Cancelled`].
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Whether the load has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the load and return its result.
    pub async fn join(mut self) -> Result<T, ApiError> {
        match (&mut self.handle).await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ApiError::Cancelled),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

impl<T> Drop for LoadHandle<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
