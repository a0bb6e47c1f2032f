use crate::error::{FaqError, FaqResult};
use async_trait::async_trait;
use database::models::{Business, FaqEntry, NewBusiness, NewFaqEntry};
use database::Database;

/// Storage seam consumed by the matching, chat and onboarding services.
#[async_trait]
pub trait FaqStore: Send + Sync {
    async fn find_business(&self, id: i64) -> FaqResult<Option<Business>>;

    /// All FAQ entries of a business, in retrieval order.
    async fn list_faqs(&self, business_id: i64) -> FaqResult<Vec<FaqEntry>>;

    /// Persists the business and its entries atomically and returns the
    /// committed business row.
    async fn onboard(&self, business: NewBusiness, faqs: Vec<NewFaqEntry>) -> FaqResult<Business>;

    async fn health_check(&self) -> FaqResult<()>;
}

#[async_trait]
impl FaqStore for Database {
    async fn find_business(&self, id: i64) -> FaqResult<Option<Business>> {
        Ok(self.businesses().find_by_id(id).await?)
    }

    async fn list_faqs(&self, business_id: i64) -> FaqResult<Vec<FaqEntry>> {
        Ok(self.faqs().list_for_business(business_id).await?)
    }

    async fn onboard(&self, business: NewBusiness, faqs: Vec<NewFaqEntry>) -> FaqResult<Business> {
        let (business, entries) = self
            .businesses()
            .onboard(&business.name, &business.email, &business.tone, &faqs)
            .await?;

        tracing::info!(
            "Committed business {} with {} FAQ entries",
            business.id,
            entries.len()
        );
        Ok(business)
    }

    async fn health_check(&self) -> FaqResult<()> {
        Database::health_check(self)
            .await
            .map_err(|e| FaqError::Storage(format!("{:#}", e)))
    }
}
