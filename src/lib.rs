//! # ws-sink
//!
//! Per-connection WebSocket write sink bridging HTTP-style response
//! semantics onto frame transports.
//!
//! Application code written against a request/response model keeps calling
//! write / error / redirect / flush; the sink translates each call into the
//! closest thing an established WebSocket can express. Payload writes become
//! text or binary frames (after an optional filter chain), error statuses and
//! redirects degrade to diagnostics because the protocol has no channel for
//! them after the handshake, and close maps to a transport disconnect.
//!
//! ## Features
//!
//! - Text or binary frame mode, fixed per connection
//! - Pluggable outbound payload filters with a zero-copy passthrough path
//! - Write history (first-write flag, last-write instant) for idle-timeout
//!   and heartbeat collaborators
//! - Safe under concurrent writers on one connection
//! - Stock tokio-tungstenite transport behind the `full` feature
//!
//! ## Example
//!
//! ```ignore
//! use ws_sink::{socket, ResponseWriter, SinkConfig, WsSink};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (transport, _read) = socket::connect("wss://example.org/push").await?;
//!     let sink = WsSink::new(transport, SinkConfig::text());
//!     sink.write_text("hello").await?;
//!     sink.close().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod sink;
#[cfg(feature = "full")]
pub mod socket;
pub mod transport;

pub use config::SinkConfig;
pub use error::{ConnectionError, Error, Result, WriteError};
pub use filter::{FilterChain, NoOpFilter, ResponseFilter};
pub use sink::{ResponseWriter, WriteState, WsSink};
pub use transport::Transport;
