//! Remote Data Gateway
//!
//! The boundary between the dashboard and the two remote services. Renderers
//! never talk HTTP themselves; they ask a [`DataGateway`] for a topic's
//! payload and are forced to handle both failure classes.

mod http;
mod mock;

pub use http::HttpGateway;
pub use mock::MockGateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::topic::Topic;

/// A fetch failure, classified for fallback and logging purposes.
///
/// Both classes are swallowed at the renderer boundary (the display shows
/// stale data or a placeholder), but permanent failures point at a broken
/// deployment and are logged at a higher severity.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// Worth retrying on the next tick: timeouts, connection resets, 5xx.
    #[error("transient fetch failure: {0}")]
    Transient(String),

    /// Not self-healing: auth failures, 4xx, malformed responses.
    #[error("permanent fetch failure: {0}")]
    Permanent(String),
}

impl GatewayError {
    pub fn is_transient(&self) -> bool {
        matches!(self, GatewayError::Transient(_))
    }
}

/// One topic's worth of remote data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payload {
    /// Items as returned by the service, one JSON object per row.
    pub items: Vec<serde_json::Value>,
}

impl Payload {
    pub fn new(items: Vec<serde_json::Value>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The service-call capability consumed by renderers.
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Fetch the current payload for a topic.
    async fn fetch(&self, topic: Topic) -> Result<Payload, GatewayError>;
}
