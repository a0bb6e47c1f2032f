use crate::handlers::ServiceError;
use crate::services::onboarding_service::OnboardingService;
use crate::state::AppState;
use axum::{extract::State, Json};
use database::models::NewBusiness;
use shared::dto::{OnboardRequest, OnboardResponse};

pub async fn onboard_handler(
    State(state): State<AppState>,
    Json(payload): Json<OnboardRequest>,
) -> Result<Json<OnboardResponse>, ServiceError> {
    payload.validate()?;

    tracing::info!(
        "Onboarding business '{}' with {} FAQs",
        payload.name,
        payload.faqs.len()
    );

    let onboarding = OnboardingService::new(state.store.clone(), state.embedder.clone());
    let business = NewBusiness {
        name: payload.name,
        email: payload.email,
        tone: payload.tone,
    };
    let business_id = onboarding.onboard(business, payload.faqs).await?;

    Ok(Json(OnboardResponse {
        message: "Business onboarded successfully".to_string(),
        business_id,
    }))
}
