//! Fetch execution off the UI thread.
//!
//! The controller hands out [`FetchRequest`]s; an executor performs them and
//! later yields the matching [`FetchCompletion`]s. The TUI uses a background
//! thread so the terminal stays responsive while a request is in flight; tests
//! use the inline executor for determinism.

use super::client::SearchClient;
use super::transport::Transport;
use crate::gallery::{FetchCompletion, FetchRequest};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

/// Something that can run fetch requests and report their completions.
pub trait FetchExecutor {
    /// Queue a request. Never blocks on the network.
    fn submit(&mut self, request: FetchRequest);

    /// Completions that have finished since the last poll, oldest first.
    /// Non-blocking.
    fn poll(&mut self) -> Vec<FetchCompletion>;
}

/// Runs each request synchronously inside `submit`.
#[derive(Debug)]
pub struct InlineExecutor<T: Transport> {
    client: SearchClient<T>,
    completed: Vec<FetchCompletion>,
}

impl<T: Transport> InlineExecutor<T> {
    /// Executor running fetches with `client`.
    pub fn new(client: SearchClient<T>) -> Self {
        Self {
            client,
            completed: Vec::new(),
        }
    }

    /// The client fetches run against.
    pub fn client(&self) -> &SearchClient<T> {
        &self.client
    }
}

impl<T: Transport> FetchExecutor for InlineExecutor<T> {
    fn submit(&mut self, request: FetchRequest) {
        self.completed.push(request.execute(&self.client));
    }

    fn poll(&mut self) -> Vec<FetchCompletion> {
        std::mem::take(&mut self.completed)
    }
}

/// Runs requests one at a time on a dedicated worker thread.
///
/// An in-flight request always runs to completion; dropping the executor
/// closes the request channel and the worker exits after its current fetch.
#[derive(Debug)]
pub struct ThreadedExecutor {
    requests: Sender<FetchRequest>,
    completions: Receiver<FetchCompletion>,
    _worker: JoinHandle<()>,
}

impl ThreadedExecutor {
    /// Move `client` onto a new worker thread.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the OS refuses to spawn the thread.
    pub fn spawn<T: Transport + 'static>(client: SearchClient<T>) -> std::io::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (completion_tx, completion_rx) = mpsc::channel::<FetchCompletion>();

        let worker = thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || {
                for request in request_rx {
                    debug!(generation = request.generation(), "Worker picked up fetch");
                    let completion = request.execute(&client);
                    if completion_tx.send(completion).is_err() {
                        break;
                    }
                }
                debug!("Fetch worker exiting");
            })?;

        Ok(Self {
            requests: request_tx,
            completions: completion_rx,
            _worker: worker,
        })
    }
}

impl FetchExecutor for ThreadedExecutor {
    fn submit(&mut self, request: FetchRequest) {
        if self.requests.send(request).is_err() {
            error!("Fetch worker is gone; request dropped");
        }
    }

    fn poll(&mut self) -> Vec<FetchCompletion> {
        self.completions.try_iter().collect()
    }
}
