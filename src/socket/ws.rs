//! tokio-tungstenite transport implementation.

use crate::error::{ConnectionError, Error};
use crate::transport::Transport;
use crate::Result;
use async_trait::async_trait;
use futures::sink::SinkExt;
use futures::stream::{SplitSink, SplitStream, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// Stream type produced by [`connect`].
pub type ClientStream = MaybeTlsStream<TcpStream>;

/// Read half handed back to the caller for inbound-frame routing.
pub type ReadHalf<S> = SplitStream<WebSocketStream<S>>;

/// Write half of a WebSocket connection.
///
/// Sends are serialized through a per-connection mutex because the
/// underlying sink requires exclusive access for one frame write. The open
/// flag is cleared by [`close`](Transport::close), by a send hitting an
/// already-closed socket, or by [`mark_closed`](WsTransport::mark_closed).
pub struct WsTransport<S> {
    writer: Mutex<SplitSink<WebSocketStream<S>, Message>>,
    open: AtomicBool,
    label: String,
}

/// Connect to the given WebSocket URL and return the write transport plus
/// the raw read half.
pub async fn connect(url: &str) -> Result<(WsTransport<ClientStream>, ReadHalf<ClientStream>)> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ConnectionError::WebSocket(e.to_string()))?;
    Ok(WsTransport::from_stream(ws_stream, url))
}

impl<S> WsTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an already-upgraded stream, e.g. a server-accepted connection.
    /// The upgrade handshake itself is the caller's business.
    pub fn from_stream(
        ws_stream: WebSocketStream<S>,
        label: impl Into<String>,
    ) -> (Self, ReadHalf<S>) {
        let (writer, reader) = ws_stream.split();
        (
            Self {
                writer: Mutex::new(writer),
                open: AtomicBool::new(true),
                label: label.into(),
            },
            reader,
        )
    }

    /// Flag the connection closed without sending a close frame. Called by
    /// the owner of the read half when it observes remote closure.
    pub fn mark_closed(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    fn send_error(&self, e: WsError) -> Error {
        match e {
            WsError::ConnectionClosed | WsError::AlreadyClosed => {
                self.open.store(false, Ordering::SeqCst);
                ConnectionError::Closed.into()
            }
            other => ConnectionError::WebSocket(other.to_string()).into(),
        }
    }
}

#[async_trait]
impl<S> Transport for WsTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn send_binary(&self, data: &[u8]) -> Result<()> {
        let mut w = self.writer.lock().await;
        w.send(Message::Binary(data.to_vec()))
            .await
            .map_err(|e| self.send_error(e))
    }

    async fn send_text(&self, data: &str) -> Result<()> {
        let mut w = self.writer.lock().await;
        w.send(Message::Text(data.to_string()))
            .await
            .map_err(|e| self.send_error(e))
    }

    async fn close(&self) -> Result<()> {
        self.open.store(false, Ordering::SeqCst);
        let mut w = self.writer.lock().await;
        match w.close().await {
            Ok(()) | Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => Ok(()),
            Err(e) => Err(ConnectionError::WebSocket(e.to_string()).into()),
        }
    }

    fn describe(&self) -> String {
        format!("websocket[{}]", self.label)
    }
}
