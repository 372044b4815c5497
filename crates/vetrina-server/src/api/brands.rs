//! Brand list, detail, and dashboard stats endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(in crate::api) struct BrandItem {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub is_featured: bool,
    pub followers_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct BrandStatsItem {
    pub slug: String,
    pub followers_count: i64,
    pub products_count: i64,
    pub total_orders: i64,
    pub total_revenue: Decimal,
    pub recent_orders: i64,
    pub reviews_count: i64,
    pub average_rating: f64,
}

impl From<vetrina_db::BrandRow> for BrandItem {
    fn from(row: vetrina_db::BrandRow) -> Self {
        Self {
            id: row.public_id,
            name: row.name,
            slug: row.slug,
            tagline: row.tagline,
            logo_url: row.logo_url,
            is_featured: row.is_featured,
            followers_count: row.followers_count,
            created_at: row.created_at,
        }
    }
}

/// Fetch an approved brand by slug or produce a `not_found` error.
async fn resolve_brand(
    pool: &sqlx::PgPool,
    slug: &str,
    request_id: &str,
) -> Result<vetrina_db::BrandRow, ApiError> {
    vetrina_db::get_brand_by_slug(pool, slug)
        .await
        .map_err(|e| map_db_error(request_id.to_string(), &e))?
        .ok_or_else(|| ApiError::new(request_id.to_string(), "not_found", "brand not found"))
}

pub(in crate::api) async fn list_brands(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<BrandItem>>>, ApiError> {
    let brands = vetrina_db::list_approved_brands(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = brands.into_iter().map(BrandItem::from).collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(in crate::api) async fn get_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BrandItem>>, ApiError> {
    let brand = resolve_brand(&state.pool, &slug, &req_id.0).await?;

    Ok(Json(ApiResponse {
        data: BrandItem::from(brand),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(in crate::api) async fn get_brand_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BrandStatsItem>>, ApiError> {
    let brand = resolve_brand(&state.pool, &slug, &req_id.0).await?;

    let stats = vetrina_ranking::brand_stats(&state.pool, &brand)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: BrandStatsItem {
            slug: brand.slug,
            followers_count: stats.followers_count,
            products_count: stats.products_count,
            total_orders: stats.total_orders,
            total_revenue: stats.total_revenue,
            recent_orders: stats.recent_orders,
            reviews_count: stats.reviews_count,
            average_rating: stats.average_rating,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
