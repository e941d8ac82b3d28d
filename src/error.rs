use thiserror::Error;

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when writing to a WebSocket connection.
#[derive(Error, Debug)]
pub enum Error {
    #[error("connection: {0}")]
    Connection(#[from] ConnectionError),

    #[error("write: {0}")]
    Write(#[from] WriteError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Connection-level errors reported by or about the transport.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The transport reported not-open before a frame could be sent.
    #[error("connection closed")]
    Closed,

    /// Transport I/O failure, passed through verbatim.
    #[error("websocket: {0}")]
    WebSocket(String),
}

/// Errors in the payload handed to a write operation.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Byte payload could not be decoded as UTF-8 for a text frame.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Sub-range does not fit inside the payload buffer.
    #[error("range {offset}+{len} out of bounds for buffer of {buf_len}")]
    InvalidRange {
        offset: usize,
        len: usize,
        buf_len: usize,
    },
}

impl Error {
    /// Returns `true` if the write failed because the connection is gone.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Connection(ConnectionError::Closed))
    }
}
