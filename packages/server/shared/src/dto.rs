use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.80;
pub const DEFAULT_TONE: &str = "friendly";

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("'{0}' must not be empty")]
    Empty(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("similarity_threshold must be a finite number, got {0}")]
    NonFiniteThreshold(f64),
    #[error("faqs[{index}].{field} must not be empty")]
    EmptyFaqField { index: usize, field: &'static str },
}

fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub business_id: i64,
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl ChatRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.message, "message")?;
        // Any finite value; outside [-1, 1] it pins every decision one way.
        if !self.similarity_threshold.is_finite() {
            return Err(ValidationError::NonFiniteThreshold(
                self.similarity_threshold,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    /// Closest FAQ question, reported even when it scored below the threshold.
    pub matched_faq: Option<String>,
    /// Raw cosine score of the closest FAQ; -1.0 when the business has no
    /// comparable entries (`matched_faq` is then null).
    pub score: f64,
    pub used_faq: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardRequest {
    pub name: String,
    pub email: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    pub faqs: Vec<FaqItem>,
}

impl OnboardRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        require(&self.tone, "tone")?;

        for (index, faq) in self.faqs.iter().enumerate() {
            if faq.question.trim().is_empty() {
                return Err(ValidationError::EmptyFaqField {
                    index,
                    field: "question",
                });
            }
            if faq.answer.trim().is_empty() {
                return Err(ValidationError::EmptyFaqField {
                    index,
                    field: "answer",
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardResponse {
    pub message: String,
    pub business_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqSummary {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub has_embedding: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessFaqsResponse {
    pub business_id: i64,
    pub name: String,
    pub faqs: Vec<FaqSummary>,
}
