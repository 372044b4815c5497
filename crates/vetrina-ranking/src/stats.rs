//! Per-brand dashboard aggregates.
//!
//! Unlike the ranking batch, this is a single-brand read: lookups still run
//! concurrently but a failure surfaces to the caller instead of degrading to
//! zero, since the dashboard shows absolute numbers rather than a relative
//! ordering.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use vetrina_db::{BrandRow, DbError};

use crate::score::{round1, window_start, RANKING_WINDOW_DAYS};

/// Aggregate counters shown on a brand's dashboard.
#[derive(Debug, Clone)]
pub struct BrandStats {
    pub followers_count: i64,
    /// Total catalog size, published or not.
    pub products_count: i64,
    pub total_orders: i64,
    pub total_revenue: Decimal,
    /// Orders in the last 30 days.
    pub recent_orders: i64,
    pub reviews_count: i64,
    /// All-time mean rating, rounded to one decimal; `0.0` with no reviews.
    pub average_rating: f64,
}

/// Compute dashboard stats for one brand.
///
/// # Errors
///
/// Returns [`DbError`] if any lookup fails.
pub async fn brand_stats(pool: &PgPool, brand: &BrandRow) -> Result<BrandStats, DbError> {
    let since = window_start(Utc::now(), RANKING_WINDOW_DAYS);

    let (products, totals, recent, reviews) = futures::join!(
        vetrina_db::count_products(pool, brand.id),
        vetrina_db::sales_totals(pool, brand.id),
        vetrina_db::count_recent_sales(pool, brand.id, since),
        vetrina_db::review_stats(pool, brand.id),
    );

    let totals = totals?;
    let reviews = reviews?;

    Ok(BrandStats {
        followers_count: brand.followers_count,
        products_count: products?,
        total_orders: totals.order_count,
        total_revenue: totals.revenue,
        recent_orders: recent?,
        reviews_count: reviews.review_count,
        average_rating: round1(reviews.avg_rating),
    })
}
