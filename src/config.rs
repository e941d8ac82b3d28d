//! Per-connection sink configuration.

use crate::filter::{NoOpFilter, ResponseFilter};
use std::sync::Arc;

/// Configuration fixed at sink construction.
///
/// `binary` selects the frame type for every outbound payload: when set,
/// text payloads are UTF-8 encoded and sent as binary frames; when clear,
/// binary payloads are decoded as UTF-8 and sent as text frames. The mode
/// never changes for the lifetime of a sink.
#[derive(Clone)]
pub struct SinkConfig {
    pub binary: bool,
    pub filter: Arc<dyn ResponseFilter>,
}

impl SinkConfig {
    /// Text-frame mode with the identity filter.
    pub fn text() -> Self {
        Self {
            binary: false,
            filter: Arc::new(NoOpFilter),
        }
    }

    /// Binary-frame mode with the identity filter.
    pub fn binary() -> Self {
        Self {
            binary: true,
            filter: Arc::new(NoOpFilter),
        }
    }

    /// Replace the active filter.
    pub fn with_filter(mut self, filter: Arc<dyn ResponseFilter>) -> Self {
        self.filter = filter;
        self
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::text()
    }
}

impl std::fmt::Debug for SinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkConfig")
            .field("binary", &self.binary)
            .field("passthrough_filter", &self.filter.is_passthrough())
            .finish()
    }
}
