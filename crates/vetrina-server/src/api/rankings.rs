//! Trending and leaderboard ranking endpoints.
//!
//! Both recompute from fresh signals on every request; there is no cached
//! ranking state to invalidate.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetrina_ranking::{PgSignalStore, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_TRENDING_LIMIT};

use crate::middleware::RequestId;

use super::{map_ranking_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

const MAX_TRENDING_LIMIT: i64 = 24;
const MAX_LEADERBOARD_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub(in crate::api) struct RankingsQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct TrendingItem {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub tagline: Option<String>,
    pub followers_count: i64,
    pub trending_score: i64,
    pub product_count: i64,
    pub recent_orders: i64,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct LeaderboardItem {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub tagline: Option<String>,
    pub score: f64,
    pub avg_rating: f64,
    pub reviews_count: i64,
    pub sales_count: i64,
}

pub(in crate::api) async fn trending_rankings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RankingsQuery>,
) -> Result<Json<ApiResponse<Vec<TrendingItem>>>, ApiError> {
    let limit = normalize_limit(
        query.limit,
        i64::try_from(DEFAULT_TRENDING_LIMIT).unwrap_or(6),
        MAX_TRENDING_LIMIT,
    );

    let store = PgSignalStore::new(state.pool.clone());
    let ranked = vetrina_ranking::trending_brands(
        &store,
        usize::try_from(limit).unwrap_or(usize::MAX),
        state.config.ranking_max_concurrent_lookups,
    )
    .await
    .map_err(|e| map_ranking_error(req_id.0.clone(), &e))?;

    let data = ranked
        .into_iter()
        .map(|entry| TrendingItem {
            id: entry.brand.public_id,
            name: entry.brand.name,
            slug: entry.brand.slug,
            logo_url: entry.brand.logo_url,
            tagline: entry.brand.tagline,
            followers_count: entry.brand.followers_count,
            trending_score: entry.trending_score,
            product_count: entry.product_count,
            recent_orders: entry.recent_orders,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(in crate::api) async fn leaderboard_rankings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RankingsQuery>,
) -> Result<Json<ApiResponse<Vec<LeaderboardItem>>>, ApiError> {
    let limit = normalize_limit(
        query.limit,
        i64::try_from(DEFAULT_LEADERBOARD_LIMIT).unwrap_or(20),
        MAX_LEADERBOARD_LIMIT,
    );

    let store = PgSignalStore::new(state.pool.clone());
    let ranked = vetrina_ranking::leaderboard(
        &store,
        usize::try_from(limit).unwrap_or(usize::MAX),
        state.config.ranking_max_concurrent_lookups,
    )
    .await
    .map_err(|e| map_ranking_error(req_id.0.clone(), &e))?;

    let data = ranked
        .into_iter()
        .map(|entry| LeaderboardItem {
            id: entry.brand.public_id,
            name: entry.brand.name,
            slug: entry.brand.slug,
            logo_url: entry.brand.logo_url,
            tagline: entry.brand.tagline,
            score: entry.score,
            avg_rating: entry.avg_rating,
            reviews_count: entry.reviews_count,
            sales_count: entry.sales_count,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
