//! Ranking orchestration: collect, score, order, truncate.
//!
//! Stateless request/response computation; there is no cached ranking state
//! and no incremental update path. Both sorts are stable and descending, so
//! tied scores keep the collector's brand order.

use std::cmp::Ordering;

use crate::collector::collect_signals;
use crate::error::RankingError;
use crate::score::{score_leaderboard, score_trending, RANKING_WINDOW_DAYS};
use crate::store::SignalStore;
use crate::types::{LeaderboardEntry, TrendingEntry};

/// Order trending entries by score descending and keep the first `limit`.
///
/// Zero scores are kept: a brand-new approved brand may still fill the
/// carousel when fewer than `limit` brands exist.
#[must_use]
pub fn rank_trending(mut entries: Vec<TrendingEntry>, limit: usize) -> Vec<TrendingEntry> {
    entries.sort_by(|a, b| b.trending_score.cmp(&a.trending_score));
    entries.truncate(limit);
    entries
}

/// Filter out zero scores, order descending, and keep the first `limit`.
#[must_use]
pub fn rank_leaderboard(entries: Vec<LeaderboardEntry>, limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<LeaderboardEntry> =
        entries.into_iter().filter(|e| e.score > 0.0).collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

/// Full trending pipeline for the homepage carousel.
///
/// # Errors
///
/// Returns [`RankingError::Store`] if the approved-brand list cannot be
/// fetched; per-brand lookup failures degrade to zero counters instead.
pub async fn trending_brands<S: SignalStore>(
    store: &S,
    limit: usize,
    max_concurrent: usize,
) -> Result<Vec<TrendingEntry>, RankingError> {
    let signals = collect_signals(store, RANKING_WINDOW_DAYS, max_concurrent).await?;
    let entries = signals.into_iter().map(score_trending).collect();
    Ok(rank_trending(entries, limit))
}

/// Full leaderboard pipeline for the public rankings page.
///
/// # Errors
///
/// Returns [`RankingError::Store`] if the approved-brand list cannot be
/// fetched; per-brand lookup failures degrade to zero counters instead.
pub async fn leaderboard<S: SignalStore>(
    store: &S,
    limit: usize,
    max_concurrent: usize,
) -> Result<Vec<LeaderboardEntry>, RankingError> {
    let signals = collect_signals(store, RANKING_WINDOW_DAYS, max_concurrent).await?;
    let entries = signals.into_iter().map(score_leaderboard).collect();
    Ok(rank_leaderboard(entries, limit))
}
