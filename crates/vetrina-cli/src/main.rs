use clap::{Parser, Subcommand};

use vetrina_ranking::{PgSignalStore, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_TRENDING_LIMIT};

#[cfg(test)]
mod tests;

const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

#[derive(Debug, Parser)]
#[command(name = "vetrina")]
#[command(about = "Vetrina marketplace command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance: migrations, connectivity, seed data
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Compute brand rankings
    Rank {
        #[command(subcommand)]
        command: RankCommands,
    },
    /// Show dashboard stats for one brand
    Stats {
        #[arg(long)]
        brand: String,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Run pending migrations
    Migrate,
    /// Verify database connectivity
    Ping,
    /// Load demo brands, products, sales, and reviews
    Seed,
}

#[derive(Debug, Subcommand)]
enum RankCommands {
    /// Homepage trending carousel ordering
    Trending {
        #[arg(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
        limit: usize,
    },
    /// Public leaderboard (zero-score brands excluded)
    Leaderboard {
        #[arg(long, default_value_t = DEFAULT_LEADERBOARD_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("no command given; try `vetrina --help`");
        return Ok(());
    };

    let pool = vetrina_db::connect_pool_from_env().await?;

    match command {
        Commands::Db { command } => match command {
            DbCommands::Migrate => {
                let applied = vetrina_db::run_migrations(&pool).await?;
                println!("applied {applied} migration(s)");
            }
            DbCommands::Ping => {
                vetrina_db::ping(&pool).await?;
                println!("database is reachable");
            }
            DbCommands::Seed => {
                let seeded = vetrina_db::seed_demo_data(&pool).await?;
                println!("seeded {seeded} demo brand(s)");
            }
        },
        Commands::Rank { command } => match command {
            RankCommands::Trending { limit } => {
                let store = PgSignalStore::new(pool);
                let ranked = vetrina_ranking::trending_brands(
                    &store,
                    limit,
                    DEFAULT_MAX_CONCURRENT_LOOKUPS,
                )
                .await?;

                if ranked.is_empty() {
                    println!("no approved brands to rank");
                    return Ok(());
                }

                println!("Trending brands:");
                for (rank, entry) in ranked.iter().enumerate() {
                    println!(
                        "{:>2}. {} ({}) score {} - {} followers, {} products, {} recent orders",
                        rank + 1,
                        entry.brand.name,
                        entry.brand.slug,
                        entry.trending_score,
                        entry.brand.followers_count,
                        entry.product_count,
                        entry.recent_orders
                    );
                }
            }
            RankCommands::Leaderboard { limit } => {
                let store = PgSignalStore::new(pool);
                let ranked =
                    vetrina_ranking::leaderboard(&store, limit, DEFAULT_MAX_CONCURRENT_LOOKUPS)
                        .await?;

                if ranked.is_empty() {
                    println!("no brands scored above zero in the last 30 days");
                    return Ok(());
                }

                println!("Brand leaderboard (last 30 days):");
                for (rank, entry) in ranked.iter().enumerate() {
                    println!(
                        "{:>2}. {} ({}) score {:.1} - avg rating {:.1} across {} reviews, {} sales",
                        rank + 1,
                        entry.brand.name,
                        entry.brand.slug,
                        entry.score,
                        entry.avg_rating,
                        entry.reviews_count,
                        entry.sales_count
                    );
                }
            }
        },
        Commands::Stats { brand } => {
            let row = vetrina_db::get_brand_by_slug(&pool, &brand)
                .await?
                .ok_or_else(|| anyhow::anyhow!("brand '{brand}' not found"))?;

            let stats = vetrina_ranking::brand_stats(&pool, &row).await?;

            println!("{} ({})", row.name, row.slug);
            println!("  followers:      {}", stats.followers_count);
            println!("  products:       {}", stats.products_count);
            println!("  total orders:   {}", stats.total_orders);
            println!("  total revenue:  {}", stats.total_revenue);
            println!("  orders (30d):   {}", stats.recent_orders);
            println!(
                "  reviews:        {} (avg rating {:.1})",
                stats.reviews_count, stats.average_rating
            );
        }
    }

    Ok(())
}
