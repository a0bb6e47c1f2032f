use crate::models::{Business, FaqEntry, NewFaqEntry};
use crate::repositories::FaqRepository;
use sqlx::{PgConnection, PgPool, Result};

pub struct BusinessRepository {
    pool: PgPool,
}

impl BusinessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Business>> {
        sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Creates the business and every FAQ row in one transaction.
    ///
    /// The business is inserted first so its id can link the entries. If any
    /// insert fails the transaction is dropped uncommitted and rolls back, so
    /// callers never observe a business with a partial FAQ set.
    pub async fn onboard(
        &self,
        name: &str,
        email: &str,
        tone: &str,
        faqs: &[NewFaqEntry],
    ) -> Result<(Business, Vec<FaqEntry>)> {
        let mut tx = self.pool.begin().await?;

        let business = Self::create(&mut *tx, name, email, tone).await?;

        let mut entries = Vec::with_capacity(faqs.len());
        for faq in faqs {
            let entry = FaqRepository::add(&mut *tx, business.id, faq).await?;
            entries.push(entry);
        }

        tx.commit().await?;

        Ok((business, entries))
    }

    /// Inserts a business row on `conn`, which may be a pooled connection or
    /// an open transaction.
    pub async fn create(
        conn: &mut PgConnection,
        name: &str,
        email: &str,
        tone: &str,
    ) -> Result<Business> {
        sqlx::query_as::<_, Business>(
            r#"
            INSERT INTO businesses (name, email, tone)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(tone)
        .fetch_one(conn)
        .await
    }
}
