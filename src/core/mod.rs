pub mod http;
pub mod runner;

pub use crate::domain::model::{OutboundRequest, Payload, ResponseRecord};
pub use crate::domain::ports::Exchange;
pub use crate::utils::error::Result;
