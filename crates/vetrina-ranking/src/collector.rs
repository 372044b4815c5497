//! Signal collection: scatter/gather over the store.
//!
//! For each approved brand the three counter lookups run concurrently, and
//! brands themselves are fanned out up to `max_concurrent` at a time. All
//! lookups are joined before scoring starts. A failed lookup degrades that
//! one counter to zero with a warning; only a failed brand-list fetch aborts
//! the batch.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};

use crate::error::RankingError;
use crate::score::window_start;
use crate::store::SignalStore;
use crate::types::{BrandCandidate, BrandSignals};

/// Collect one [`BrandSignals`] bundle per approved brand.
///
/// The output preserves the store's brand order, which pins the tie-break
/// order of the final ranking regardless of lookup completion order.
///
/// # Errors
///
/// Returns [`RankingError::Store`] only when the approved-brand list itself
/// cannot be fetched.
pub async fn collect_signals<S: SignalStore>(
    store: &S,
    window_days: i64,
    max_concurrent: usize,
) -> Result<Vec<BrandSignals>, RankingError> {
    let brands = store
        .list_approved_brands()
        .await
        .map_err(|e| RankingError::Store(e.to_string()))?;

    let since = window_start(Utc::now(), window_days);

    let mut gathered: Vec<(usize, BrandSignals)> = stream::iter(brands.into_iter().enumerate())
        .map(|(idx, brand)| async move { (idx, collect_brand(store, brand, since).await) })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    gathered.sort_by_key(|&(idx, _)| idx);
    Ok(gathered.into_iter().map(|(_, signals)| signals).collect())
}

/// Run the three counter lookups for one brand concurrently, defaulting each
/// failed counter to zero.
async fn collect_brand<S: SignalStore>(
    store: &S,
    brand: BrandCandidate,
    since: DateTime<Utc>,
) -> BrandSignals {
    let (products, sales, ratings) = futures::join!(
        store.count_published_products(brand.id),
        store.count_recent_sales(brand.id, since),
        store.list_recent_ratings(brand.id, since),
    );

    let published_products = match products {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(
                brand = %brand.slug,
                error = %e,
                "product count lookup failed, defaulting to zero"
            );
            0
        }
    };

    let recent_sales = match sales {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(
                brand = %brand.slug,
                error = %e,
                "sale count lookup failed, defaulting to zero"
            );
            0
        }
    };

    let recent_ratings = match ratings {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(
                brand = %brand.slug,
                error = %e,
                "review lookup failed, defaulting to no reviews"
            );
            Vec::new()
        }
    };

    BrandSignals {
        brand,
        published_products,
        recent_sales,
        recent_ratings,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::score::RANKING_WINDOW_DAYS;

    pub(crate) fn candidate(id: i64, slug: &str, followers: i64) -> BrandCandidate {
        BrandCandidate {
            id,
            public_id: Uuid::new_v4(),
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            tagline: None,
            logo_url: None,
            followers_count: followers,
        }
    }

    /// In-memory store with per-brand fixtures and injectable failures.
    #[derive(Default)]
    pub(crate) struct MemStore {
        pub brands: Vec<BrandCandidate>,
        pub products: HashMap<i64, i64>,
        pub sales: HashMap<i64, Vec<DateTime<Utc>>>,
        pub ratings: HashMap<i64, Vec<(DateTime<Utc>, i16)>>,
        pub fail_brand_list: bool,
        pub fail_products_for: Option<i64>,
    }

    impl SignalStore for MemStore {
        type Error = std::io::Error;

        async fn list_approved_brands(&self) -> Result<Vec<BrandCandidate>, Self::Error> {
            if self.fail_brand_list {
                return Err(std::io::Error::other("store offline"));
            }
            Ok(self.brands.clone())
        }

        async fn count_published_products(&self, brand_id: i64) -> Result<i64, Self::Error> {
            if self.fail_products_for == Some(brand_id) {
                return Err(std::io::Error::other("lookup failed"));
            }
            Ok(self.products.get(&brand_id).copied().unwrap_or(0))
        }

        async fn count_recent_sales(
            &self,
            brand_id: i64,
            since: DateTime<Utc>,
        ) -> Result<i64, Self::Error> {
            let count = self
                .sales
                .get(&brand_id)
                .map(|dates| dates.iter().filter(|&&d| d >= since).count())
                .unwrap_or(0);
            Ok(count as i64)
        }

        async fn list_recent_ratings(
            &self,
            brand_id: i64,
            since: DateTime<Utc>,
        ) -> Result<Vec<i16>, Self::Error> {
            let ratings = self
                .ratings
                .get(&brand_id)
                .map(|entries| {
                    entries
                        .iter()
                        .filter(|(created_at, _)| *created_at >= since)
                        .map(|&(_, rating)| rating)
                        .collect()
                })
                .unwrap_or_default();
            Ok(ratings)
        }
    }

    #[tokio::test]
    async fn collects_signals_in_brand_list_order() {
        let mut store = MemStore::default();
        store.brands = vec![candidate(1, "first", 10), candidate(2, "second", 20)];
        store.products.insert(1, 3);
        store.products.insert(2, 7);

        let signals = collect_signals(&store, RANKING_WINDOW_DAYS, 8)
            .await
            .unwrap();

        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].brand.slug, "first");
        assert_eq!(signals[0].published_products, 3);
        assert_eq!(signals[1].brand.slug, "second");
        assert_eq!(signals[1].published_products, 7);
    }

    #[tokio::test]
    async fn failed_counter_defaults_to_zero_without_aborting_batch() {
        let mut store = MemStore::default();
        store.brands = vec![candidate(1, "healthy", 10), candidate(2, "flaky", 20)];
        store.products.insert(1, 5);
        store.products.insert(2, 5);
        store.fail_products_for = Some(2);

        let signals = collect_signals(&store, RANKING_WINDOW_DAYS, 8)
            .await
            .unwrap();

        assert_eq!(signals[0].published_products, 5);
        assert_eq!(signals[1].published_products, 0);
    }

    #[tokio::test]
    async fn failed_brand_list_is_fatal() {
        let store = MemStore {
            fail_brand_list: true,
            ..MemStore::default()
        };
        let result = collect_signals(&store, RANKING_WINDOW_DAYS, 8).await;
        assert!(matches!(result, Err(RankingError::Store(_))));
    }

    #[tokio::test]
    async fn sales_respect_the_thirty_day_window() {
        let now = Utc::now();
        let mut store = MemStore::default();
        store.brands = vec![candidate(1, "windowed", 0)];
        store.sales.insert(
            1,
            vec![now - Duration::days(29), now - Duration::days(31)],
        );

        let signals = collect_signals(&store, RANKING_WINDOW_DAYS, 8)
            .await
            .unwrap();
        assert_eq!(signals[0].recent_sales, 1);
    }

    #[tokio::test]
    async fn window_lower_bound_is_inclusive() {
        // Exercise the `>=` comparison directly with a frozen `since`.
        let since = Utc.with_ymd_and_hms(2026, 7, 31, 0, 0, 0).unwrap();
        let mut store = MemStore::default();
        store.sales.insert(
            1,
            vec![since, since - Duration::seconds(1), since + Duration::days(1)],
        );

        let count = store.count_recent_sales(1, since).await.unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn empty_brand_list_yields_empty_signals() {
        let store = MemStore::default();
        let signals = collect_signals(&store, RANKING_WINDOW_DAYS, 8)
            .await
            .unwrap();
        assert!(signals.is_empty());
    }
}
