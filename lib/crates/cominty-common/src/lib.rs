pub mod api;
pub mod config;

pub use api::{ErrorDetail, GREETING, GreetingResponse, PredictQuery, PredictResponse};
pub use config::{CONTAINER_PORT, ServerConfig};
