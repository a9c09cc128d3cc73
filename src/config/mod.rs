use crate::domain::model::{OutboundRequest, Payload};
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{validate_header, validate_method, validate_url, Validate};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/post-test";

/// The request the probe sends. `Default` is the fixed fixture; nothing at
/// runtime overrides it.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub endpoint: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub payload: Payload,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            method: "POST".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            payload: Payload::default(),
        }
    }
}

impl FixtureConfig {
    /// Same fixture aimed at another endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn build_request(&self) -> Result<OutboundRequest> {
        let url = validate_url("endpoint", &self.endpoint)?;
        let method = validate_method("method", &self.method)?;
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| validate_header(name, value))
            .collect::<Result<Vec<_>>>()?;
        let body = serde_json::to_vec(&self.payload).map_err(ProbeError::Serialization)?;

        Ok(OutboundRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

impl Validate for FixtureConfig {
    fn validate(&self) -> Result<()> {
        self.build_request().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;

    #[test]
    fn test_default_fixture_is_valid() {
        assert!(FixtureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_request_is_deterministic() {
        let config = FixtureConfig::default();
        let first = config.build_request().unwrap();
        let second = config.build_request().unwrap();

        assert_eq!(first.method, Method::POST);
        assert_eq!(first.url.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(first.headers.len(), 1);
        assert_eq!(first.headers[0].0, CONTENT_TYPE);
        assert_eq!(first.headers[0].1, "application/json");
        assert_eq!(first.body, second.body);

        let parsed: serde_json::Value = serde_json::from_slice(&first.body).unwrap();
        assert_eq!(parsed, serde_json::json!({"data": "Yeah!", "other": 43}));
        let payload: Payload = serde_json::from_slice(&first.body).unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[test]
    fn test_rejects_invalid_fixture() {
        let bad_scheme = FixtureConfig::with_endpoint("ftp://localhost/post-test");
        assert!(matches!(
            bad_scheme.validate(),
            Err(ProbeError::InvalidConfigValue { ref field, .. }) if field == "endpoint"
        ));

        let empty_method = FixtureConfig {
            method: String::new(),
            ..FixtureConfig::default()
        };
        assert!(empty_method.validate().is_err());
    }
}
