//! Concrete WebSocket transport over tokio-tungstenite.
//!
//! The sink only needs the [`Transport`](crate::transport::Transport)
//! capability; this module provides the stock implementation for stacks that
//! do not bring their own connection object. Requires the `full` feature.

mod ws;

pub use ws::{connect, ClientStream, ReadHalf, WsTransport};
