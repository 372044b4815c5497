//! Database operations for the `brands` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `brands` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandRow {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub slug: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub status: String,
    pub is_featured: bool,
    pub followers_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns all approved brands, ordered by follower count descending.
///
/// Only approved brands participate in ranking; pending and rejected brands
/// are excluded at the query level. Ties on follower count fall back to id
/// so the candidate order is deterministic.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_approved_brands(pool: &PgPool) -> Result<Vec<BrandRow>, DbError> {
    let rows = sqlx::query_as::<_, BrandRow>(
        "SELECT id, public_id, name, slug, tagline, logo_url, status, \
                is_featured, followers_count, created_at, updated_at \
         FROM brands \
         WHERE status = 'APPROVED' \
         ORDER BY followers_count DESC, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns a single approved brand by slug, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_brand_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BrandRow>, DbError> {
    let row = sqlx::query_as::<_, BrandRow>(
        "SELECT id, public_id, name, slug, tagline, logo_url, status, \
                is_featured, followers_count, created_at, updated_at \
         FROM brands \
         WHERE slug = $1 AND status = 'APPROVED'",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
