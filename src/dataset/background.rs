use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::Result;
use tracing::error;

use super::loader::load_dataset;
use crate::models::Alumnus;

/// Outcome of polling a background load
#[derive(Debug)]
pub enum LoadPoll {
    /// Still loading
    Pending,
    /// Load finished. Returned once; the handle is spent afterwards.
    Ready(Vec<Alumnus>),
    /// Load failed or the loader went away. Already logged; never retried.
    Failed,
}

/// Receiving end of a background dataset load
pub struct LoadHandle {
    receiver: Option<Receiver<Result<Vec<Alumnus>>>>,
}

impl LoadHandle {
    /// Non-blocking check for the load result
    pub fn poll(&mut self) -> LoadPoll {
        let Some(receiver) = &self.receiver else {
            return LoadPoll::Failed;
        };

        match receiver.try_recv() {
            Err(TryRecvError::Empty) => LoadPoll::Pending,
            Ok(Ok(alumni)) => {
                self.receiver = None;
                LoadPoll::Ready(alumni)
            }
            Ok(Err(e)) => {
                error!("Failed to load alumni dataset: {:#}", e);
                self.receiver = None;
                LoadPoll::Failed
            }
            Err(TryRecvError::Disconnected) => {
                error!("Dataset loader stopped without a result");
                self.receiver = None;
                LoadPoll::Failed
            }
        }
    }
}

/// Load the dataset at `path` on a background thread
pub fn spawn_loader(path: PathBuf) -> LoadHandle {
    spawn_with(move || load_dataset(&path))
}

pub(crate) fn spawn_with<F>(load: F) -> LoadHandle
where
    F: FnOnce() -> Result<Vec<Alumnus>> + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may already be gone if the UI quit first
        let _ = sender.send(load());
    });
    LoadHandle { receiver: Some(receiver) }
}
