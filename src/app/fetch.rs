//! Background request plumbing.
//!
//! Network calls run on short-lived worker threads and report back through
//! `std::sync::mpsc` channels polled once per frame by the UI.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

/// Lifecycle of a view's dataset
#[derive(Debug, Clone, Default)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Loadable::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// A result that will arrive from a worker thread.
pub struct Pending<T> {
    rx: Receiver<T>,
}

impl<T: Send + 'static> Pending<T> {
    /// Run `job` on a worker thread and deliver its result
    pub fn spawn(job: impl FnOnce() -> T + Send + 'static) -> Self {
        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(job());
        });
        Self { rx }
    }

    /// Non-blocking check for the result. A disconnected worker (panic)
    /// yields `None` forever; callers drop the handle on first `Some`.
    pub fn poll(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
