use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use shared::dto::ValidationError;

pub mod business;
pub mod chat;
pub mod health;
pub mod onboard;

use crate::error::FaqError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/chat", post(chat::chat_handler))
        .route("/onboard", post(onboard::onboard_handler))
        .route("/businesses/:id/faqs", get(business::list_faqs))
}

pub enum ServiceError {
    Faq(FaqError),
    BadRequest(String),
    Unavailable(String),
}

impl From<FaqError> for ServiceError {
    fn from(e: FaqError) -> Self {
        ServiceError::Faq(e)
    }
}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        ServiceError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, kind, msg) = match self {
            ServiceError::Faq(e) => {
                let status = match &e {
                    FaqError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    FaqError::NotFound(_) => StatusCode::NOT_FOUND,
                    FaqError::EmbeddingService(_) | FaqError::CompletionService(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                    FaqError::DegenerateVector(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    FaqError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.kind(), e.to_string())
            }
            ServiceError::BadRequest(e) => (StatusCode::BAD_REQUEST, "invalid_input", e),
            ServiceError::Unavailable(e) => (StatusCode::SERVICE_UNAVAILABLE, "storage", e),
        };

        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, msg);
        }

        (status, Json(json!({ "error": msg, "kind": kind }))).into_response()
    }
}
