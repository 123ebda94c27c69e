use crate::error::{KestrelError, KestrelResult};
use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lock-free atomic metrics for Link monitoring
#[derive(Debug, Default)]
pub struct AtomicLinkMetrics {
    messages_sent: AtomicU64,
    messages_received: AtomicU64,
    messages_dropped: AtomicU64,
}

impl AtomicLinkMetrics {
    /// Get current metrics snapshot (for monitoring/debugging)
    pub fn snapshot(&self) -> LinkMetrics {
        LinkMetrics {
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            messages_received: self.messages_received.load(Ordering::Relaxed),
            messages_dropped: self.messages_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Simple metrics snapshot for Link monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkMetrics {
    pub messages_sent: u64,
    pub messages_received: u64,
    pub messages_dropped: u64,
}

/// Bounded in-process channel for point-to-point messaging
///
/// Both endpoints are non-blocking: `try_send` fails fast when the buffer
/// is full and `try_recv` returns `None` when it is empty. Clones share
/// the underlying buffer and metrics, so one side can be handed to a
/// producer and another to a consumer.
pub struct Link<T> {
    topic_name: String,
    tx: Sender<T>,
    rx: Receiver<T>,
    metrics: Arc<AtomicLinkMetrics>,
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self {
            topic_name: self.topic_name.clone(),
            tx: self.tx.clone(),
            rx: self.rx.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Link")
            .field("topic_name", &self.topic_name)
            .field("metrics", &self.metrics.snapshot())
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Link<T> {
    /// Create a new Link with default capacity
    pub fn new(topic_name: &str) -> Self {
        Self::new_with_capacity(topic_name, 256)
    }

    /// Create a new Link with custom capacity
    pub fn new_with_capacity(topic_name: &str, capacity: usize) -> Self {
        let (tx, rx) = channel::bounded(capacity);
        log::debug!("link '{}' created (capacity {})", topic_name, capacity);

        Link {
            topic_name: topic_name.to_string(),
            tx,
            rx,
            metrics: Arc::new(AtomicLinkMetrics::default()),
        }
    }

    /// Send a message without blocking
    ///
    /// A full buffer counts the message as dropped and reports a
    /// communication error; the caller decides whether that matters.
    pub fn try_send(&self, msg: T) -> KestrelResult<()> {
        match self.tx.try_send(msg) {
            Ok(()) => {
                self.metrics.messages_sent.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                self.metrics.messages_dropped.fetch_add(1, Ordering::Relaxed);
                Err(KestrelError::communication(format!(
                    "link '{}' full, message dropped",
                    self.topic_name
                )))
            }
            Err(TrySendError::Disconnected(_)) => {
                self.metrics.messages_dropped.fetch_add(1, Ordering::Relaxed);
                Err(KestrelError::communication(format!(
                    "link '{}' disconnected",
                    self.topic_name
                )))
            }
        }
    }

    /// Receive a message without blocking; `None` when the buffer is empty
    pub fn try_recv(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(msg) => {
                self.metrics
                    .messages_received
                    .fetch_add(1, Ordering::Relaxed);
                Some(msg)
            }
            Err(_) => None,
        }
    }

    /// Topic name this link carries
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Current metrics snapshot
    pub fn metrics(&self) -> LinkMetrics {
        self.metrics.snapshot()
    }
}
