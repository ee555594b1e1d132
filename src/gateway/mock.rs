//! Mock gateway for tests and demos.
//!
//! Returns scripted results without touching the network and records every
//! fetch for assertions.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{DataGateway, GatewayError, Payload};
use crate::topic::Topic;

/// Gateway that replays a scripted queue of results (FIFO). When the queue
/// is empty it returns the default payload.
#[derive(Clone)]
pub struct MockGateway {
    script: Arc<Mutex<VecDeque<Result<Payload, GatewayError>>>>,
    default: Payload,
    requests: Arc<Mutex<Vec<Topic>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            default: Payload::default(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create with a scripted sequence of results.
    pub fn with_script(script: Vec<Result<Payload, GatewayError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            default: Payload::default(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the payload returned once the script is exhausted.
    pub fn with_default(mut self, payload: Payload) -> Self {
        self.default = payload;
        self
    }

    /// Append a result to the script.
    pub fn push_result(&self, result: Result<Payload, GatewayError>) {
        self.script.lock().unwrap().push_back(result);
    }

    /// Topics fetched so far, in order.
    pub fn requests(&self) -> Vec<Topic> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of fetches made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataGateway for MockGateway {
    async fn fetch(&self, topic: Topic) -> Result<Payload, GatewayError> {
        self.requests.lock().unwrap().push(topic);
        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.default.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_script_then_default() {
        let gateway = MockGateway::with_script(vec![
            Err(GatewayError::Transient("boom".to_string())),
            Ok(Payload::new(vec![json!({"id": 1})])),
        ])
        .with_default(Payload::new(vec![json!({"id": "default"})]));

        assert!(gateway.fetch(Topic::Assets).await.is_err());
        assert_eq!(gateway.fetch(Topic::Assets).await.unwrap().items.len(), 1);
        let fallback = gateway.fetch(Topic::Units).await.unwrap();
        assert_eq!(fallback.items[0]["id"], "default");
    }

    #[tokio::test]
    async fn test_records_requests() {
        let gateway = MockGateway::new();
        let _ = gateway.fetch(Topic::Assets).await;
        let _ = gateway.fetch(Topic::Units).await;
        assert_eq!(gateway.requests(), vec![Topic::Assets, Topic::Units]);
    }
}
