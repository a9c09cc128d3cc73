use crate::domain::model::{OutboundRequest, ResponseRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One request/response round trip. Any status code is a successful exchange;
/// only transport and body decoding failures are errors.
#[async_trait]
pub trait Exchange: Send + Sync {
    async fn exchange(&self, request: &OutboundRequest) -> Result<ResponseRecord>;
}
