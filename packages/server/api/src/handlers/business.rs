use crate::error::FaqError;
use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use shared::dto::{BusinessFaqsResponse, FaqSummary};

pub async fn list_faqs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BusinessFaqsResponse>, ServiceError> {
    let business = state
        .store
        .find_business(id)
        .await?
        .ok_or_else(|| FaqError::NotFound(format!("business {} does not exist", id)))?;

    let faqs = state
        .store
        .list_faqs(id)
        .await?
        .into_iter()
        .map(|f| FaqSummary {
            id: f.id,
            has_embedding: f.embedding.is_some(),
            question: f.question,
            answer: f.answer,
        })
        .collect();

    Ok(Json(BusinessFaqsResponse {
        business_id: business.id,
        name: business.name,
        faqs,
    }))
}
