//! Pure scoring formulas.
//!
//! Two independently tuned formulas coexist: the trending score drives the
//! homepage carousel and weighs followers, catalog size, and recent orders;
//! the leaderboard score drives the public rankings page and weighs review
//! quality, sales volume, and review volume with per-component caps. They are
//! kept separate; merging them would change visible rankings.

use chrono::{DateTime, Duration, Utc};

use crate::types::{BrandSignals, LeaderboardEntry, TrendingEntry};

/// Window applied to the time-bounded signal terms of both formulas.
pub const RANKING_WINDOW_DAYS: i64 = 30;

/// Homepage carousel size.
pub const DEFAULT_TRENDING_LIMIT: usize = 6;

/// Public leaderboard size.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;

/// Lower bound of the half-open signal window `[now - days, now)`.
///
/// A record stamped exactly at the returned instant is inside the window;
/// every store query compares with `>=`.
#[must_use]
pub fn window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Round to one decimal, half away from zero.
///
/// Matches what the rankings display has always shown for these non-negative
/// scores.
#[must_use]
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Trending score: `followers * 2 + published products * 10 + recent orders * 5`.
///
/// Pure sort key for the carousel; only relative order matters, and zero is
/// a perfectly valid score.
#[must_use]
pub fn trending_score(followers: i64, published_products: i64, recent_sales: i64) -> i64 {
    followers * 2 + published_products * 10 + recent_sales * 5
}

/// Score one brand's signal bundle for the trending carousel.
#[must_use]
pub fn score_trending(signals: BrandSignals) -> TrendingEntry {
    let trending_score = trending_score(
        signals.brand.followers_count,
        signals.published_products,
        signals.recent_sales,
    );
    TrendingEntry {
        brand: signals.brand,
        trending_score,
        product_count: signals.published_products,
        recent_orders: signals.recent_sales,
    }
}

/// Sub-scores of the leaderboard formula, before assembly into an entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderboardScore {
    pub score: f64,
    pub avg_rating: f64,
    pub rating_score: f64,
    pub sales_score: f64,
    pub reviews_score: f64,
}

/// Leaderboard score over a 30-day window of ratings and sales.
///
/// `rating_score = mean(ratings) * 20` (max 100, zero when no reviews),
/// `sales_score = min(sales * 2, 40)`, `reviews_score = min(reviews * 2, 20)`;
/// the total and the displayed average are rounded to one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)] // counts stay far below 2^52
pub fn leaderboard_score(ratings: &[i16], sales_count: i64) -> LeaderboardScore {
    let reviews_count = ratings.len() as i64;
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
        sum as f64 / reviews_count as f64
    };

    let rating_score = avg_rating * 20.0;
    let sales_score = ((sales_count * 2) as f64).min(40.0);
    let reviews_score = ((reviews_count * 2) as f64).min(20.0);

    LeaderboardScore {
        score: round1(rating_score + sales_score + reviews_score),
        avg_rating: round1(avg_rating),
        rating_score,
        sales_score,
        reviews_score,
    }
}

/// Score one brand's signal bundle for the leaderboard.
#[must_use]
#[allow(clippy::cast_possible_wrap)] // ratings come from a bounded table
pub fn score_leaderboard(signals: BrandSignals) -> LeaderboardEntry {
    let scored = leaderboard_score(&signals.recent_ratings, signals.recent_sales);
    LeaderboardEntry {
        brand: signals.brand,
        score: scored.score,
        avg_rating: scored.avg_rating,
        rating_score: scored.rating_score,
        sales_score: scored.sales_score,
        reviews_score: scored.reviews_score,
        reviews_count: signals.recent_ratings.len() as i64,
        sales_count: signals.recent_sales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn trending_score_weights_signals() {
        // followers 100, products 5, orders 8 => 200 + 50 + 40.
        assert_eq!(trending_score(100, 5, 8), 290);
    }

    #[test]
    fn trending_score_of_nothing_is_zero() {
        assert_eq!(trending_score(0, 0, 0), 0);
    }

    #[test]
    fn leaderboard_score_zero_signals() {
        let scored = leaderboard_score(&[], 0);
        assert_eq!(scored.score, 0.0);
        assert_eq!(scored.avg_rating, 0.0);
        assert_eq!(scored.rating_score, 0.0);
    }

    #[test]
    fn leaderboard_rating_alone_reaches_one_hundred() {
        // Two five-star reviews, no sales: rating 100 + reviews min(4, 20).
        let scored = leaderboard_score(&[5, 5], 0);
        assert_eq!(scored.rating_score, 100.0);
        assert_eq!(scored.score, 104.0);
    }

    #[test]
    fn leaderboard_sales_score_is_clamped() {
        let scored = leaderboard_score(&[], 100);
        assert_eq!(scored.sales_score, 40.0);
    }

    #[test]
    fn leaderboard_reviews_score_is_clamped() {
        let ratings = vec![3i16; 50];
        let scored = leaderboard_score(&ratings, 0);
        assert_eq!(scored.reviews_score, 20.0);
    }

    #[test]
    fn leaderboard_worked_example() {
        // 10 reviews averaging 4.2 (eight 4s, two 5s), 30 sales:
        // 84 + 40 + 20 = 144.0.
        let ratings = [4, 4, 4, 4, 4, 4, 4, 4, 5, 5];
        let avg: f64 = f64::from(ratings.iter().map(|&r| i32::from(r)).sum::<i32>()) / 10.0;
        assert!((avg - 4.2).abs() < 1e-9);

        let scored = leaderboard_score(&ratings, 30);
        assert!((scored.rating_score - 84.0).abs() < 1e-9);
        assert_eq!(scored.sales_score, 40.0);
        assert_eq!(scored.reviews_score, 20.0);
        assert_eq!(scored.score, 144.0);
        assert_eq!(scored.avg_rating, 4.2);
    }

    #[test]
    fn round1_rounds_half_away_from_zero() {
        assert_eq!(round1(4.25), 4.3);
        assert_eq!(round1(4.24), 4.2);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let ratings = [5, 4, 3, 5];
        let first = leaderboard_score(&ratings, 7);
        let second = leaderboard_score(&ratings, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn window_start_subtracts_days() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let start = window_start(now, RANKING_WINDOW_DAYS);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 7, 31, 12, 0, 0).unwrap());
    }
}
