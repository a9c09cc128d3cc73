use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// POST body sent by the fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub data: String,
    pub other: i64,
}

impl Default for Payload {
    fn default() -> Self {
        Self {
            data: "Yeah!".to_string(),
            other: 43,
        }
    }
}

/// A fully assembled request, body already serialized.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    pub status: u16,
    pub body: serde_json::Value,
}

impl fmt::Display for ResponseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.body)
    }
}
