use std::future::Future;

use log::warn;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Requests started from the UI thread and not yet collected
///
/// Each request runs on the tokio runtime; its result is picked up by
/// `drain_ready` on a later frame. Requests are independent: they are not
/// cancelled or ordered against each other, so a page simply applies
/// results in the order they finish.
pub struct TaskQueue<T> {
    runtime: Handle,
    pending: Vec<oneshot::Receiver<T>>,
}

impl<T: Send + 'static> TaskQueue<T> {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Vec::new(),
        }
    }

    /// Runs `future` in the background and repaints `ctx` when it finishes.
    pub fn spawn<F>(&mut self, ctx: &egui::Context, future: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let output = future.await;
            // The receiver is gone only if the page was dropped.
            let _ = tx.send(output);
            ctx.request_repaint();
        });
        self.pending.push(rx);
    }

    /// Removes and returns every finished result.
    pub fn drain_ready(&mut self) -> Vec<T> {
        let mut ready = Vec::new();
        self.pending.retain_mut(|rx| match rx.try_recv() {
            Ok(output) => {
                ready.push(output);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Closed) => {
                warn!("Background request ended without a result");
                false
            }
        });
        ready
    }

    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }
}
