//! Demo seed data: approved brands with products, sales, and reviews so the
//! ranking commands produce output on a fresh database.

use sqlx::PgPool;

use crate::DbError;

struct SeedBrand {
    name: &'static str,
    slug: &'static str,
    tagline: &'static str,
    followers: i64,
    published_products: i64,
    /// Sales spread across the last 30 days, one per day starting yesterday.
    recent_sales: i64,
    /// Ratings for reviews created within the last 30 days.
    ratings: &'static [i16],
}

const SEED_BRANDS: &[SeedBrand] = &[
    SeedBrand {
        name: "Aurora Atelier",
        slug: "aurora-atelier",
        tagline: "Handmade leather goods from Florence",
        followers: 120,
        published_products: 8,
        recent_sales: 25,
        ratings: &[5, 5, 4, 5, 4],
    },
    SeedBrand {
        name: "Borgo Ceramics",
        slug: "borgo-ceramics",
        tagline: "Small-batch ceramics",
        followers: 45,
        published_products: 4,
        recent_sales: 6,
        ratings: &[4, 3, 4],
    },
    SeedBrand {
        name: "Cascata Knits",
        slug: "cascata-knits",
        tagline: "Merino knitwear",
        followers: 10,
        published_products: 2,
        recent_sales: 0,
        ratings: &[],
    },
];

/// Upsert the demo dataset. Safe to run repeatedly: brands are upserted by
/// slug and each brand's child rows are rebuilt inside one transaction.
///
/// Returns the number of brands seeded.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement fails; the transaction rolls
/// back as a whole.
pub async fn seed_demo_data(pool: &PgPool) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;

    for brand in SEED_BRANDS {
        let brand_id: i64 = sqlx::query_scalar(
            "INSERT INTO brands (name, slug, tagline, status, followers_count) \
             VALUES ($1, $2, $3, 'APPROVED', $4) \
             ON CONFLICT (slug) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 tagline = EXCLUDED.tagline, \
                 status = EXCLUDED.status, \
                 followers_count = EXCLUDED.followers_count, \
                 updated_at = NOW() \
             RETURNING id",
        )
        .bind(brand.name)
        .bind(brand.slug)
        .bind(brand.tagline)
        .bind(brand.followers)
        .fetch_one(&mut *tx)
        .await?;

        // Child rows have no natural key, so rebuild them from scratch.
        sqlx::query("DELETE FROM external_sales WHERE brand_id = $1")
            .bind(brand_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM brand_reviews WHERE brand_id = $1")
            .bind(brand_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM products WHERE brand_id = $1")
            .bind(brand_id)
            .execute(&mut *tx)
            .await?;

        for n in 0..brand.published_products {
            sqlx::query(
                "INSERT INTO products (brand_id, name, is_published, published_at) \
                 VALUES ($1, $2, true, NOW())",
            )
            .bind(brand_id)
            .bind(format!("{} item {}", brand.name, n + 1))
            .execute(&mut *tx)
            .await?;
        }

        // One unpublished product scheduled for tomorrow, to exercise the
        // auto-publish job.
        sqlx::query(
            "INSERT INTO products (brand_id, name, is_published, scheduled_for) \
             VALUES ($1, $2, false, NOW() + INTERVAL '1 day')",
        )
        .bind(brand_id)
        .bind(format!("{} upcoming release", brand.name))
        .execute(&mut *tx)
        .await?;

        for n in 0..brand.recent_sales {
            sqlx::query(
                "INSERT INTO external_sales (brand_id, amount, sale_date) \
                 VALUES ($1, 29.90, NOW() - make_interval(days => $2::INT) - INTERVAL '1 hour')",
            )
            .bind(brand_id)
            .bind((n % 29) + 1)
            .execute(&mut *tx)
            .await?;
        }

        for &rating in brand.ratings {
            sqlx::query(
                "INSERT INTO brand_reviews (brand_id, rating, created_at) \
                 VALUES ($1, $2, NOW() - INTERVAL '3 days')",
            )
            .bind(brand_id)
            .bind(rating)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(SEED_BRANDS.len())
}
