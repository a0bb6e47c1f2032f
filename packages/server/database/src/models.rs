use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub tone: String, // free-text style descriptor, 'friendly' by default
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FaqEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// JSON array of floats. NULL when the entry was stored without a vector.
    pub embedding: Option<String>,
    pub business_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a business row.
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub name: String,
    pub email: String,
    pub tone: String,
}

/// Insert shape for a FAQ row; the owning business is supplied separately.
#[derive(Debug, Clone)]
pub struct NewFaqEntry {
    pub question: String,
    pub answer: String,
    pub embedding: Option<String>,
}
