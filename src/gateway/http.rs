//! HTTP gateway backed by the real Account Server / Data Manager APIs.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use super::{DataGateway, GatewayError, Payload};
use crate::environment::Environment;
use crate::topic::{Service, Topic};

/// Per-request timeout. A hung remote call must never stall the refresh
/// cadence for longer than this.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway that issues real GETs against the configured service pair.
pub struct HttpGateway {
    client: reqwest::Client,
    as_api: Url,
    dm_api: Url,
    token: Option<String>,
}

impl HttpGateway {
    pub fn new(environment: &Environment) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            as_api: environment.api_url(Service::Account).clone(),
            dm_api: environment.api_url(Service::Data).clone(),
            token: environment.token().map(str::to_string),
        })
    }

    fn endpoint_url(&self, topic: Topic) -> Result<Url, GatewayError> {
        let mut url = match topic.service() {
            Service::Account => self.as_api.clone(),
            Service::Data => self.dm_api.clone(),
        };
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::Permanent(format!("base URL for {} has no path", topic.service()))
            })?
            .pop_if_empty()
            .extend(topic.endpoint().split('/'));
        Ok(url)
    }

    /// Pull the item array out of a service response. The services wrap the
    /// array in an object keyed per topic; a bare array is accepted too.
    fn extract_items(topic: Topic, body: serde_json::Value) -> Result<Payload, GatewayError> {
        match body {
            serde_json::Value::Array(items) => Ok(Payload::new(items)),
            serde_json::Value::Object(mut map) => match map.remove(topic.items_key()) {
                Some(serde_json::Value::Array(items)) => Ok(Payload::new(items)),
                Some(_) => Err(GatewayError::Permanent(format!(
                    "'{}' in {} response is not an array",
                    topic.items_key(),
                    topic
                ))),
                None => Err(GatewayError::Permanent(format!(
                    "{} response has no '{}' key",
                    topic,
                    topic.items_key()
                ))),
            },
            other => Err(GatewayError::Permanent(format!(
                "unexpected {} response shape: {}",
                topic,
                json_kind(&other)
            ))),
        }
    }
}

#[async_trait]
impl DataGateway for HttpGateway {
    async fn fetch(&self, topic: Topic) -> Result<Payload, GatewayError> {
        let url = self.endpoint_url(topic)?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify_request_error)?;

        let status = response.status();
        if status.is_server_error() {
            return Err(GatewayError::Transient(format!(
                "{} returned {}",
                topic.service(),
                status
            )));
        }
        if !status.is_success() {
            return Err(GatewayError::Permanent(format!(
                "{} returned {}",
                topic.service(),
                status
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Permanent(format!("malformed {topic} response: {e}")))?;

        Self::extract_items(topic, body)
    }
}

fn classify_request_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() || e.is_connect() {
        GatewayError::Transient(e.to_string())
    } else {
        GatewayError::Permanent(e.to_string())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gateway() -> HttpGateway {
        HttpGateway {
            client: reqwest::Client::new(),
            as_api: "https://as.example.com/account-server-api".parse().unwrap(),
            dm_api: "https://dm.example.com/data-manager-api".parse().unwrap(),
            token: None,
        }
    }

    #[test]
    fn test_endpoint_url_joins_path() {
        let url = gateway().endpoint_url(Topic::Projects).unwrap();
        assert_eq!(
            url.as_str(),
            "https://dm.example.com/data-manager-api/project"
        );

        let url = gateway().endpoint_url(Topic::DefinedExchangeRates).unwrap();
        assert_eq!(
            url.as_str(),
            "https://as.example.com/account-server-api/exchange-rate/defined"
        );
    }

    #[test]
    fn test_extract_items_from_keyed_object() {
        let body = json!({"units": [{"id": "unit-1"}, {"id": "unit-2"}]});
        let payload = HttpGateway::extract_items(Topic::Units, body).unwrap();
        assert_eq!(payload.items.len(), 2);
    }

    #[test]
    fn test_extract_items_from_bare_array() {
        let body = json!([{"id": "asset-1"}]);
        let payload = HttpGateway::extract_items(Topic::Assets, body).unwrap();
        assert_eq!(payload.items.len(), 1);
    }

    #[test]
    fn test_extract_items_bad_shape_is_permanent() {
        let err = HttpGateway::extract_items(Topic::Assets, json!("nope")).unwrap_err();
        assert!(!err.is_transient());

        let err = HttpGateway::extract_items(Topic::Assets, json!({"assets": 42})).unwrap_err();
        assert!(!err.is_transient());

        let err = HttpGateway::extract_items(Topic::Assets, json!({"other": []})).unwrap_err();
        assert!(!err.is_transient());
    }
}
