//! Database operations for the `brand_reviews` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

/// All-time review aggregate for a brand.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct ReviewStats {
    pub review_count: i64,
    /// Mean rating, `0.0` when the brand has no reviews.
    pub avg_rating: f64,
}

/// Returns the ratings of reviews created on or after `since`, oldest first.
///
/// Ratings come back as raw `1..=5` values so the caller can both count them
/// and average them without a second query.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recent_ratings(
    pool: &PgPool,
    brand_id: i64,
    since: DateTime<Utc>,
) -> Result<Vec<i16>, DbError> {
    let ratings: Vec<i16> = sqlx::query_scalar(
        "SELECT rating FROM brand_reviews \
         WHERE brand_id = $1 AND created_at >= $2 \
         ORDER BY created_at",
    )
    .bind(brand_id)
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(ratings)
}

/// Returns all-time review count and mean rating for a brand.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn review_stats(pool: &PgPool, brand_id: i64) -> Result<ReviewStats, DbError> {
    let stats = sqlx::query_as::<_, ReviewStats>(
        "SELECT COUNT(*) AS review_count, \
                COALESCE(AVG(rating)::DOUBLE PRECISION, 0) AS avg_rating \
         FROM brand_reviews \
         WHERE brand_id = $1",
    )
    .bind(brand_id)
    .fetch_one(pool)
    .await?;

    Ok(stats)
}
