//! Request and response bodies for the greeting/sum HTTP service.

use serde::{Deserialize, Serialize};

/// Message returned by `GET /`.
pub const GREETING: &str = "Hello from FastAPI!";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}

/// Query string of `GET /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictQuery {
    pub x: i64,
    pub y: i64,
}

impl PredictQuery {
    /// Sum of both operands, widened so it never overflows.
    #[must_use]
    pub fn sum(self) -> i128 {
        i128::from(self.x) + i128::from(self.y)
    }
}

/// Body of `GET /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub result: i128,
}

/// Body of a 422 validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
