//! Database operations for the `external_sales` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::DbError;

/// All-time sale totals for a brand: order count plus revenue sum.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct SalesTotals {
    pub order_count: i64,
    pub revenue: Decimal,
}

/// Counts sales for a brand with `sale_date` on or after `since`.
///
/// The window is half-open `[since, now)`: a sale dated exactly `since` is
/// included, matching the `>=` comparison used everywhere the window applies.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_recent_sales(
    pool: &PgPool,
    brand_id: i64,
    since: DateTime<Utc>,
) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM external_sales \
         WHERE brand_id = $1 AND sale_date >= $2",
    )
    .bind(brand_id)
    .bind(since)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Returns all-time order count and revenue sum for a brand.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn sales_totals(pool: &PgPool, brand_id: i64) -> Result<SalesTotals, DbError> {
    let totals = sqlx::query_as::<_, SalesTotals>(
        "SELECT COUNT(*) AS order_count, \
                COALESCE(SUM(amount), 0) AS revenue \
         FROM external_sales \
         WHERE brand_id = $1",
    )
    .bind(brand_id)
    .fetch_one(pool)
    .await?;

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    async fn insert_brand(pool: &PgPool, slug: &str) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO brands (name, slug, status) \
             VALUES ($1, $2, 'APPROVED') RETURNING id",
        )
        .bind(format!("Brand {slug}"))
        .bind(slug)
        .fetch_one(pool)
        .await
        .expect("insert brand")
    }

    async fn insert_sale(pool: &PgPool, brand_id: i64, sale_date: DateTime<Utc>) {
        sqlx::query(
            "INSERT INTO external_sales (brand_id, amount, sale_date) \
             VALUES ($1, 19.90, $2)",
        )
        .bind(brand_id)
        .bind(sale_date)
        .execute(pool)
        .await
        .expect("insert sale");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn sale_on_window_boundary_is_included(pool: PgPool) {
        let brand_id = insert_brand(&pool, "boundary").await;
        let since = Utc::now() - Duration::days(30);

        insert_sale(&pool, brand_id, since).await;
        insert_sale(&pool, brand_id, since - Duration::days(1)).await;

        let count = count_recent_sales(&pool, brand_id, since)
            .await
            .expect("count");
        assert_eq!(count, 1);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn sales_totals_sum_all_time_revenue(pool: PgPool) {
        let brand_id = insert_brand(&pool, "totals").await;
        let now = Utc::now();

        insert_sale(&pool, brand_id, now - Duration::days(5)).await;
        insert_sale(&pool, brand_id, now - Duration::days(400)).await;

        let totals = sales_totals(&pool, brand_id).await.expect("totals");
        assert_eq!(totals.order_count, 2);
        assert_eq!(totals.revenue, Decimal::new(3980, 2));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn brand_without_sales_has_zero_totals(pool: PgPool) {
        let brand_id = insert_brand(&pool, "quiet").await;

        let totals = sales_totals(&pool, brand_id).await.expect("totals");
        assert_eq!(totals.order_count, 0);
        assert_eq!(totals.revenue, Decimal::ZERO);
    }
}
