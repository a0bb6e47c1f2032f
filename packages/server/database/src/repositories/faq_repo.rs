use crate::models::{FaqEntry, NewFaqEntry};
use sqlx::{PgConnection, PgPool, Result};

pub struct FaqRepository {
    pool: PgPool,
}

impl FaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every FAQ of the business in insertion order.
    pub async fn list_for_business(&self, business_id: i64) -> Result<Vec<FaqEntry>> {
        sqlx::query_as::<_, FaqEntry>("SELECT * FROM faqs WHERE business_id = $1 ORDER BY id")
            .bind(business_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Inserts one FAQ row linked to `business_id` on `conn`.
    pub async fn add(
        conn: &mut PgConnection,
        business_id: i64,
        faq: &NewFaqEntry,
    ) -> Result<FaqEntry> {
        sqlx::query_as::<_, FaqEntry>(
            r#"
            INSERT INTO faqs (question, answer, embedding, business_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(&faq.embedding)
        .bind(business_id)
        .fetch_one(conn)
        .await
    }
}
