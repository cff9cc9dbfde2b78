//! Background fetch for the event loop.
//!
//! The whole paginated fetch runs on one worker thread. Its single result
//! comes back over a channel that the UI thread polls without blocking.

use crate::model::{Entity, NetworkError};
use crate::source::{PageSource, fetch_all};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, error};

/// Outcome of polling a [`FetchHandle`].
#[derive(Debug)]
pub enum FetchStatus {
    /// Still fetching.
    Pending,
    /// Finished, successfully or not. Reported exactly once.
    Done(Result<Vec<Entity>, NetworkError>),
}

/// Receiving end of a background fetch.
///
/// Dropping the handle does not stop the worker; its result is discarded.
#[derive(Debug)]
pub struct FetchHandle {
    receiver: Receiver<Result<Vec<Entity>, NetworkError>>,
}

impl FetchHandle {
    /// Check for the result without blocking.
    ///
    /// A worker that exits without sending (it panicked) is reported as
    /// `NetworkError::WorkerLost`.
    pub fn poll(&self) -> FetchStatus {
        match self.receiver.try_recv() {
            Ok(result) => FetchStatus::Done(result),
            Err(TryRecvError::Empty) => FetchStatus::Pending,
            Err(TryRecvError::Disconnected) => FetchStatus::Done(Err(NetworkError::WorkerLost)),
        }
    }

    /// Block until the fetch finishes.
    pub fn wait(self) -> Result<Vec<Entity>, NetworkError> {
        self.receiver.recv().unwrap_or(Err(NetworkError::WorkerLost))
    }
}

/// Start fetching every entity from `start_url` on a worker thread.
///
/// # Errors
///
/// Returns the I/O error if the thread cannot be spawned.
pub fn spawn_fetch<S>(source: S, start_url: impl Into<String>) -> std::io::Result<FetchHandle>
where
    S: PageSource + 'static,
{
    let start_url = start_url.into();
    let (sender, receiver) = mpsc::channel();

    thread::Builder::new()
        .name("entity-fetch".to_string())
        .spawn(move || {
            debug!(url = %start_url, "background fetch started");
            let result = fetch_all(&source, &start_url);
            if let Err(err) = &result {
                error!(error = %err, "background fetch failed");
            }
            // Receiver may be gone if the UI already exited
            let _ = sender.send(result);
        })?;

    Ok(FetchHandle { receiver })
}
