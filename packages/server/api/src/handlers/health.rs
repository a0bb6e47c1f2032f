use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "SupportBot API is running" }))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ServiceError> {
    state
        .store
        .health_check()
        .await
        .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

    Ok(Json(json!({ "status": "ok" })))
}
