pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::FixtureConfig;
pub use core::{http::HttpExchange, runner::RequestRunner};
pub use domain::model::{Payload, ResponseRecord};
pub use utils::error::{ProbeError, Result};
