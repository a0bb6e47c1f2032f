use crate::error::{FaqError, FaqResult};
use async_trait::async_trait;

/// Converts text into a fixed-length vector via a remote model.
///
/// Implementations make exactly one remote call per `embed` and never retry.
/// Any remote failure surfaces as `FaqError::EmbeddingService`; a partial or
/// zero-filled vector is never returned in its place.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> FaqResult<Vec<f32>>;
}

/// Rejects text that should never reach the remote model.
pub fn ensure_embeddable(text: &str) -> FaqResult<()> {
    if text.trim().is_empty() {
        return Err(FaqError::InvalidInput(
            "cannot embed empty text".to_string(),
        ));
    }
    Ok(())
}

/// Storable form of an embedding: a JSON array of floats.
///
/// Empty vectors and non-finite components are rejected, since JSON would
/// write NaN as `null` and the stored row could never be read back.
pub fn serialize_embedding(vector: &[f32]) -> FaqResult<String> {
    if vector.is_empty() {
        return Err(FaqError::InvalidInput(
            "cannot store an empty embedding".to_string(),
        ));
    }
    if vector.iter().any(|x| !x.is_finite()) {
        return Err(FaqError::InvalidInput(
            "embedding contains non-finite values".to_string(),
        ));
    }
    serde_json::to_string(vector)
        .map_err(|e| FaqError::InvalidInput(format!("unserializable embedding: {}", e)))
}

pub fn deserialize_embedding(raw: &str) -> FaqResult<Vec<f32>> {
    let vector: Vec<f32> = serde_json::from_str(raw)
        .map_err(|e| FaqError::InvalidInput(format!("malformed stored embedding: {}", e)))?;
    if vector.is_empty() {
        return Err(FaqError::InvalidInput(
            "stored embedding is empty".to_string(),
        ));
    }
    Ok(vector)
}
