use crate::error::{FaqError, FaqResult};
use crate::services::search::embedding::{serialize_embedding, Embedder};
use crate::services::store::FaqStore;
use database::models::{NewBusiness, NewFaqEntry};
use shared::dto::FaqItem;
use std::sync::Arc;

pub struct OnboardingService {
    store: Arc<dyn FaqStore>,
    embedder: Arc<dyn Embedder>,
}

impl OnboardingService {
    pub fn new(store: Arc<dyn FaqStore>, embedder: Arc<dyn Embedder>) -> Self {
        Self { store, embedder }
    }

    /// Registers a business with its FAQ set and returns the new business id.
    ///
    /// All-or-nothing: each answer is embedded in order before anything is
    /// written, and the business plus its entries are then committed in one
    /// transaction. A failure at any step leaves no rows behind.
    pub async fn onboard(&self, business: NewBusiness, faqs: Vec<FaqItem>) -> FaqResult<i64> {
        let mut entries = Vec::with_capacity(faqs.len());

        for (index, item) in faqs.into_iter().enumerate() {
            let vector = self.embedder.embed(&item.answer).await.map_err(|e| {
                tracing::error!(
                    "Onboarding '{}' aborted at FAQ #{}: {}",
                    business.name,
                    index,
                    e
                );
                e
            })?;

            let embedding = serialize_embedding(&vector).map_err(|e| {
                FaqError::EmbeddingService(format!(
                    "unusable vector for FAQ #{}: {}",
                    index, e
                ))
            })?;

            entries.push(NewFaqEntry {
                question: item.question,
                answer: item.answer,
                embedding: Some(embedding),
            });
        }

        let name = business.name.clone();
        let created = self.store.onboard(business, entries).await?;

        tracing::info!("Onboarded business '{}' as id {}", name, created.id);
        Ok(created.id)
    }
}
