//! WebSocket-backed response writer.

use crate::config::SinkConfig;
use crate::error::{ConnectionError, WriteError};
use crate::sink::{ResponseWriter, WriteState};
use crate::transport::Transport;
use crate::Result;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, trace};

/// Response writer over a frame transport.
///
/// One instance per connection. The frame mode and filter are fixed at
/// construction; write history lives in a [`WriteState`] so concurrent
/// writers (timers, producers, inbound-message handlers) never corrupt it.
/// Frame-send serialization, where the socket needs it, is the transport's
/// job.
pub struct WsSink<T: Transport> {
    transport: T,
    config: SinkConfig,
    state: WriteState,
}

impl<T: Transport> WsSink<T> {
    pub fn new(transport: T, config: SinkConfig) -> Self {
        Self {
            transport,
            config,
            state: WriteState::new(),
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether any write has been attempted on this connection.
    pub fn has_written(&self) -> bool {
        self.state.has_written()
    }

    /// Offset of the most recent write attempt since the sink was created.
    pub fn last_write(&self) -> Option<Duration> {
        self.state.last_write()
    }

    /// Time elapsed since the most recent write attempt. Idle-timeout and
    /// heartbeat logic polls this.
    pub fn idle_for(&self) -> Option<Duration> {
        self.state.idle_for()
    }

    fn check_open(&self) -> Result<()> {
        if self.transport.is_open() {
            Ok(())
        } else {
            Err(ConnectionError::Closed.into())
        }
    }

    async fn write_text_inner(&self, data: &str) -> Result<()> {
        self.check_open()?;
        trace!("websocket write");
        if self.config.binary {
            let payload = self.config.filter.filter_binary(data.as_bytes());
            self.transport.send_binary(&payload).await
        } else {
            let payload = self.config.filter.filter_text(data);
            self.transport.send_text(&payload).await
        }
    }

    async fn write_binary_inner(&self, data: &[u8]) -> Result<()> {
        self.check_open()?;
        trace!("websocket write");
        if self.config.binary {
            let payload = self.config.filter.filter_binary(data);
            self.transport.send_binary(&payload).await
        } else {
            let text = std::str::from_utf8(data).map_err(WriteError::InvalidEncoding)?;
            let payload = self.config.filter.filter_text(text);
            self.transport.send_text(&payload).await
        }
    }

    async fn write_range_inner(&self, data: &[u8], offset: usize, len: usize) -> Result<()> {
        self.check_open()?;
        let slice = offset
            .checked_add(len)
            .and_then(|end| data.get(offset..end))
            .ok_or(WriteError::InvalidRange {
                offset,
                len,
                buf_len: data.len(),
            })?;
        trace!("websocket write");
        if self.config.binary {
            if self.config.filter.is_passthrough() {
                // Identity filter: hand the sub-range straight to the
                // transport, no intermediate buffer.
                self.transport.send_binary(slice).await
            } else {
                let payload = self.config.filter.filter_binary(slice);
                self.transport.send_binary(&payload).await
            }
        } else {
            let text = std::str::from_utf8(slice).map_err(WriteError::InvalidEncoding)?;
            let payload = self.config.filter.filter_text(text);
            self.transport.send_text(&payload).await
        }
    }
}

#[async_trait]
impl<T: Transport> ResponseWriter for WsSink<T> {
    async fn write_text(&self, data: &str) -> Result<()> {
        self.state.mark_written();
        let result = self.write_text_inner(data).await;
        self.state.touch();
        result
    }

    async fn write_binary(&self, data: &[u8]) -> Result<()> {
        self.state.mark_written();
        let result = self.write_binary_inner(data).await;
        self.state.touch();
        result
    }

    async fn write_range(&self, data: &[u8], offset: usize, len: usize) -> Result<()> {
        self.state.mark_written();
        let result = self.write_range_inner(data, offset, len).await;
        self.state.touch();
        result
    }

    fn write_error(&self, code: u16, message: &str) {
        if !self.state.has_written() {
            info!(
                code,
                reason = message,
                "handshake succeeded but the dispatched target failed; connection stays open"
            );
        } else {
            debug!(code, reason = message, "error signal after first write");
        }
    }

    fn redirect(&self, location: &str) {
        error!(location, "websocket redirect not supported");
    }

    async fn close(&self) -> Result<()> {
        trace!("websocket close");
        self.transport.close().await
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport> fmt::Display for WsSink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.transport.describe())
    }
}
