//! The write sink: HTTP-shaped response operations over a frame transport.
//!
//! Upstream code written against a request/response model keeps calling
//! write / error / redirect / flush; the sink translates those into frame
//! sends where the protocol has an equivalent and into diagnostics where it
//! does not. One sink per connection.

mod state;
mod ws;

pub use state::WriteState;
pub use ws::WsSink;

use crate::Result;
use async_trait::async_trait;

/// Capability set expected from a per-connection response writer.
///
/// `write_error` and `redirect` are infallible by contract: an established
/// WebSocket has no channel for a status code or a redirect, so both degrade
/// to diagnostics and the connection keeps operating.
#[async_trait]
pub trait ResponseWriter: Send + Sync {
    /// Send a character payload as one frame.
    async fn write_text(&self, data: &str) -> Result<()>;

    /// Send a binary payload as one frame.
    async fn write_binary(&self, data: &[u8]) -> Result<()>;

    /// Send `data[offset..offset + len]` as one frame. With a passthrough
    /// filter in binary mode the sub-range goes out without an intermediate
    /// copy.
    async fn write_range(&self, data: &[u8], offset: usize, len: usize) -> Result<()>;

    /// Record an upstream HTTP-style error signal. Logging only; never
    /// touches the transport, never fails, never closes the connection.
    fn write_error(&self, code: u16, message: &str);

    /// Redirects are not representable after the handshake. Logging only.
    fn redirect(&self, location: &str);

    /// Request transport-level disconnect. No pre-check; idempotence is the
    /// transport's contract.
    async fn close(&self) -> Result<()>;

    /// No-op: frames are sent eagerly, there is no sink-level buffer.
    async fn flush(&self) -> Result<()>;
}
