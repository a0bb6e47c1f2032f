use super::embedding::deserialize_embedding;
use super::similarity::{cosine_similarity, ensure_comparable};
use crate::error::FaqResult;
use crate::services::store::FaqStore;
use database::models::FaqEntry;
use std::sync::Arc;

/// Closest FAQ entry for a query and its cosine score.
#[derive(Debug, Clone)]
pub struct FaqMatch {
    pub entry: FaqEntry,
    pub score: f64,
}

/// Exact linear scan over a business's FAQ embeddings.
pub struct MatchingEngine {
    store: Arc<dyn FaqStore>,
}

impl MatchingEngine {
    pub fn new(store: Arc<dyn FaqStore>) -> Self {
        Self { store }
    }

    /// Best FAQ of `business_id` for `query`, or `None` when the business has
    /// no entry with a usable embedding. Thresholding is left to the caller.
    pub async fn find_best_match(
        &self,
        business_id: i64,
        query: &[f32],
    ) -> FaqResult<Option<FaqMatch>> {
        let entries = self.store.list_faqs(business_id).await?;
        tracing::debug!(
            "Scanning {} FAQ entries for business {}",
            entries.len(),
            business_id
        );
        best_match(entries, query)
    }
}

/// Picks the entry with the strictly greatest score.
///
/// Ties keep the entry seen first. Entries without an embedding, or whose
/// stored embedding is unreadable, of the wrong dimension or zero-norm, are
/// skipped rather than scored.
pub fn best_match<I>(entries: I, query: &[f32]) -> FaqResult<Option<FaqMatch>>
where
    I: IntoIterator<Item = FaqEntry>,
{
    ensure_comparable(query)?;

    let mut best: Option<FaqMatch> = None;

    for entry in entries {
        let Some(raw) = entry.embedding.as_deref() else {
            continue;
        };

        let vector = match deserialize_embedding(raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Skipping FAQ {}: {}", entry.id, e);
                continue;
            }
        };

        let score = match cosine_similarity(query, &vector) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Skipping FAQ {}: {}", entry.id, e);
                continue;
            }
        };

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(FaqMatch { entry, score });
        }
    }

    Ok(best)
}
