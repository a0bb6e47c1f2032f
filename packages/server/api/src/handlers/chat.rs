use crate::handlers::ServiceError;
use crate::services::chat_service::ChatService;
use crate::state::AppState;
use axum::{extract::State, Json};
use shared::dto::{ChatRequest, ChatResponse};

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServiceError> {
    payload.validate()?;

    let chat_service = ChatService::new(
        state.store.clone(),
        state.embedder.clone(),
        state.completer.clone(),
    );

    let response = chat_service
        .handle_chat(
            payload.business_id,
            &payload.message,
            payload.similarity_threshold,
        )
        .await?;

    Ok(Json(response))
}
