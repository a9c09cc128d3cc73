use crate::core::{Exchange, OutboundRequest, ResponseRecord};
use crate::utils::error::{ProbeError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// `Exchange` over a real HTTP connection. The client carries no timeout.
#[derive(Debug, Clone, Default)]
pub struct HttpExchange {
    client: Client,
}

impl HttpExchange {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Exchange for HttpExchange {
    async fn exchange(&self, request: &OutboundRequest) -> Result<ResponseRecord> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.clone(), value.clone());
        }

        tracing::debug!("Sending {} {}", request.method, request.url);
        let response = builder.body(request.body.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        // 非 2xx 不視為錯誤，仍然解析回應內容
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).map_err(ProbeError::Decode)?;

        Ok(ResponseRecord {
            status: status.as_u16(),
            body,
        })
    }
}
