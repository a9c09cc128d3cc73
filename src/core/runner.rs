use crate::config::FixtureConfig;
use crate::core::http::HttpExchange;
use crate::core::{Exchange, ResponseRecord};
use crate::utils::error::Result;

/// Runs the fixture once: build, send, await, parse.
pub struct RequestRunner<E: Exchange> {
    config: FixtureConfig,
    exchange: E,
}

impl RequestRunner<HttpExchange> {
    pub fn over_http(config: FixtureConfig) -> Self {
        Self::new(config, HttpExchange::new())
    }
}

impl<E: Exchange> RequestRunner<E> {
    pub fn new(config: FixtureConfig, exchange: E) -> Self {
        Self { config, exchange }
    }

    pub async fn run(&self) -> Result<ResponseRecord> {
        let request = self.config.build_request()?;
        tracing::info!("POST fixture -> {}", request.url);

        let record = self.exchange.exchange(&request).await?;
        tracing::info!("Received status {}", record.status);

        Ok(record)
    }
}
