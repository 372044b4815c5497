//! Database operations for the `products` table.

use sqlx::PgPool;

use crate::DbError;

/// Counts currently published products for a brand.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_published_products(pool: &PgPool, brand_id: i64) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM products \
         WHERE brand_id = $1 AND is_published = true",
    )
    .bind(brand_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Counts all products for a brand, published or not.
///
/// Used by the brand dashboard stats, which report total catalog size rather
/// than published count.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_products(pool: &PgPool, brand_id: i64) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE brand_id = $1")
        .bind(brand_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Publishes every product whose scheduled launch time has passed.
///
/// Flips `is_published`, stamps `published_at`, and clears `scheduled_for` in
/// a single statement. Returns the number of products published.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn publish_due_products(pool: &PgPool) -> Result<u64, DbError> {
    let result = sqlx::query(
        "UPDATE products \
         SET is_published = true, published_at = NOW(), scheduled_for = NULL, updated_at = NOW() \
         WHERE is_published = false \
           AND scheduled_for IS NOT NULL \
           AND scheduled_for <= NOW()",
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
