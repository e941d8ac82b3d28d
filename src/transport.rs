//! Transport abstraction for the write path.
//!
//! Implement this trait to plug in a WebSocket connection from whatever
//! server or client stack owns the socket. The sink uses it for sending and
//! closing; receiving is handled by whoever keeps the read half, typically a
//! task that routes inbound frames to application handlers.

use crate::Result;
use async_trait::async_trait;

/// Async trait for a frame-oriented connection (e.g. a WebSocket).
///
/// One frame per `send_*` call. Whether concurrent sends on one socket
/// interleave safely is the implementor's contract; implementations over
/// sinks that need exclusive access must serialize internally.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whether the socket is currently open. Polled before every write,
    /// never cached by callers.
    fn is_open(&self) -> bool;

    /// Send one binary frame.
    async fn send_binary(&self, data: &[u8]) -> Result<()>;

    /// Send one text frame.
    async fn send_text(&self, data: &str) -> Result<()>;

    /// Close the transport. Closing an already-closed transport is not an
    /// error.
    async fn close(&self) -> Result<()>;

    /// Identity string for diagnostics (peer address, stream label, ...).
    fn describe(&self) -> String;
}

// A shared transport writes like the transport itself; the read-half owner
// typically keeps one clone to flag closure.
#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    async fn send_binary(&self, data: &[u8]) -> Result<()> {
        (**self).send_binary(data).await
    }

    async fn send_text(&self, data: &str) -> Result<()> {
        (**self).send_text(data).await
    }

    async fn close(&self) -> Result<()> {
        (**self).close().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
