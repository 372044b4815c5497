use uuid::Uuid;

/// Static brand fields carried through the ranking pipeline unchanged.
#[derive(Debug, Clone)]
pub struct BrandCandidate {
    pub id: i64,
    pub public_id: Uuid,
    pub name: String,
    pub slug: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub followers_count: i64,
}

/// The raw signal bundle collected for one brand and one time window.
///
/// Counters a lookup failed to produce default to zero (empty ratings); the
/// bundle never records which lookups failed.
#[derive(Debug, Clone)]
pub struct BrandSignals {
    pub brand: BrandCandidate,
    pub published_products: i64,
    pub recent_sales: i64,
    /// Raw `1..=5` ratings of reviews inside the window.
    pub recent_ratings: Vec<i16>,
}

/// One entry of the homepage trending carousel.
#[derive(Debug, Clone)]
pub struct TrendingEntry {
    pub brand: BrandCandidate,
    pub trending_score: i64,
    pub product_count: i64,
    pub recent_orders: i64,
}

/// One entry of the public leaderboard, with the contributing sub-scores
/// kept for explainability.
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub brand: BrandCandidate,
    /// Total score, rounded to one decimal.
    pub score: f64,
    /// Mean window rating, rounded to one decimal for display.
    pub avg_rating: f64,
    pub rating_score: f64,
    pub sales_score: f64,
    pub reviews_score: f64,
    pub reviews_count: i64,
    pub sales_count: i64,
}
