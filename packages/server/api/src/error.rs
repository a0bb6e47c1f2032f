use thiserror::Error;

/// Failures raised by the FAQ matching, chat and onboarding services.
#[derive(Error, Debug)]
pub enum FaqError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding service error: {0}")]
    EmbeddingService(String),

    #[error("Completion service error: {0}")]
    CompletionService(String),

    #[error("Degenerate vector: {0}")]
    DegenerateVector(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl FaqError {
    /// Stable machine-readable classification, rendered next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            FaqError::InvalidInput(_) => "invalid_input",
            FaqError::EmbeddingService(_) => "embedding_service",
            FaqError::CompletionService(_) => "completion_service",
            FaqError::DegenerateVector(_) => "degenerate_vector",
            FaqError::NotFound(_) => "not_found",
            FaqError::Storage(_) => "storage",
        }
    }
}

impl From<database::sqlx::Error> for FaqError {
    fn from(e: database::sqlx::Error) -> Self {
        FaqError::Storage(e.to_string())
    }
}

pub type FaqResult<T> = Result<T, FaqError>;
