//! Read-only signal source boundary.
//!
//! The ranking engine never writes; its only collaborator is a store that can
//! list approved brands and answer three per-brand counter lookups. The
//! Postgres implementation delegates to `vetrina-db`; tests use an in-memory
//! store.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::types::BrandCandidate;

pub trait SignalStore: Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Approved brands only; the returned order pins the tie-break order of
    /// the final ranking.
    fn list_approved_brands(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<BrandCandidate>, Self::Error>> + Send;

    fn count_published_products(
        &self,
        brand_id: i64,
    ) -> impl std::future::Future<Output = Result<i64, Self::Error>> + Send;

    fn count_recent_sales(
        &self,
        brand_id: i64,
        since: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<i64, Self::Error>> + Send;

    fn list_recent_ratings(
        &self,
        brand_id: i64,
        since: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Vec<i16>, Self::Error>> + Send;
}

/// [`SignalStore`] backed by the Postgres pool.
#[derive(Debug, Clone)]
pub struct PgSignalStore {
    pool: PgPool,
}

impl PgSignalStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<vetrina_db::BrandRow> for BrandCandidate {
    fn from(row: vetrina_db::BrandRow) -> Self {
        Self {
            id: row.id,
            public_id: row.public_id,
            name: row.name,
            slug: row.slug,
            tagline: row.tagline,
            logo_url: row.logo_url,
            followers_count: row.followers_count,
        }
    }
}

impl SignalStore for PgSignalStore {
    type Error = vetrina_db::DbError;

    async fn list_approved_brands(&self) -> Result<Vec<BrandCandidate>, Self::Error> {
        let rows = vetrina_db::list_approved_brands(&self.pool).await?;
        Ok(rows.into_iter().map(BrandCandidate::from).collect())
    }

    async fn count_published_products(&self, brand_id: i64) -> Result<i64, Self::Error> {
        vetrina_db::count_published_products(&self.pool, brand_id).await
    }

    async fn count_recent_sales(
        &self,
        brand_id: i64,
        since: DateTime<Utc>,
    ) -> Result<i64, Self::Error> {
        vetrina_db::count_recent_sales(&self.pool, brand_id, since).await
    }

    async fn list_recent_ratings(
        &self,
        brand_id: i64,
        since: DateTime<Utc>,
    ) -> Result<Vec<i16>, Self::Error> {
        vetrina_db::list_recent_ratings(&self.pool, brand_id, since).await
    }
}
