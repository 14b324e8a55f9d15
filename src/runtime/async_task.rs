//! Handles for spawned GitHub calls.
//!
//! Each endpoint call runs on its own tokio task. The calls of one repository
//! therefore proceed concurrently while the collector awaits their handles in
//! the order it needs them.

use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

/// A spawned call ended without answering, e.g. it panicked or the runtime
/// shut down mid-run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: task dropped before answering")]
pub struct TaskDropped {
    pub label: String,
}

/// Handle to one spawned endpoint call.
pub struct AsyncTask<T> {
    label: String,
    rx: oneshot::Receiver<T>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    /// Spawn `future` on the current tokio runtime. `label` names the call
    /// when it is dropped.
    pub fn spawn<F>(label: impl Into<String>, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self {
            label: label.into(),
            rx,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, TaskDropped>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        Pin::new(&mut this.rx).poll(cx).map(|received| {
            received.map_err(|_| TaskDropped {
                label: this.label.clone(),
            })
        })
    }
}

/// Handle to a spawned call producing many items, such as every page of a search.
pub struct AsyncStream<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Stream for AsyncStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// Sending half given to a paging producer.
pub struct PageSink<T, E> {
    tx: mpsc::UnboundedSender<Result<T, E>>,
}

impl<T, E> PageSink<T, E> {
    /// Forward one page of items. Returns `false` once the consumer is gone.
    pub fn send_page(&self, items: impl IntoIterator<Item = T>) -> bool {
        items.into_iter().all(|item| self.tx.send(Ok(item)).is_ok())
    }
}

impl<T, E> AsyncStream<Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Spawn a producer that pushes items page by page.
    ///
    /// Items reach the stream as soon as their page is sent. A producer
    /// failure arrives after the items already sent, as the last item.
    pub fn paged<F, Fut>(produce: F) -> Self
    where
        F: FnOnce(PageSink<T, E>) -> Fut,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let pages = produce(PageSink { tx: tx.clone() });
        tokio::spawn(async move {
            if let Err(e) = pages.await {
                let _ = tx.send(Err(e));
            }
        });
        Self { rx }
    }
}
