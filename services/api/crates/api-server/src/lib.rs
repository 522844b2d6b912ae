//! Greeting/sum HTTP service.
//!
//! Stateless: every request is computed independently, so the router carries
//! no shared state.

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use cominty_common::{ErrorDetail, GreetingResponse, PredictQuery, PredictResponse};

/// Build the service router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/predict", get(predict))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse::default())
}

async fn predict(query: Result<Query<PredictQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "rejected predict query");
            return unprocessable(rejection.body_text());
        }
    };

    Json(PredictResponse {
        result: query.sum(),
    })
    .into_response()
}

/// Minimal health-check handler for container liveness checks.
async fn health() -> StatusCode {
    StatusCode::OK
}

fn unprocessable(detail: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDetail { detail })).into_response()
}
