//! Brand ranking engine for vetrina.
//!
//! Collects per-brand signals (followers, published products, recent sales,
//! recent reviews) from a [`SignalStore`], combines them with two fixed
//! scoring formulas, and produces the ordered lists behind the homepage
//! trending carousel and the public leaderboard. Scoring is pure and
//! deterministic; every call recomputes from fresh signals.

pub mod collector;
pub mod error;
pub mod rank;
pub mod score;
pub mod stats;
pub mod store;
pub mod types;

pub use collector::collect_signals;
pub use error::RankingError;
pub use rank::{leaderboard, rank_leaderboard, rank_trending, trending_brands};
pub use score::{
    leaderboard_score, round1, score_leaderboard, score_trending, trending_score, window_start,
    LeaderboardScore, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_TRENDING_LIMIT, RANKING_WINDOW_DAYS,
};
pub use stats::{brand_stats, BrandStats};
pub use store::{PgSignalStore, SignalStore};
pub use types::{BrandCandidate, BrandSignals, LeaderboardEntry, TrendingEntry};
