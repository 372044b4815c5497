use super::*;

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["vetrina", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli = Cli::try_parse_from(["vetrina", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn parses_db_seed_command() {
    let cli = Cli::try_parse_from(["vetrina", "db", "seed"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed
        })
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["vetrina"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn rank_trending_defaults_to_carousel_size() {
    let cli = Cli::try_parse_from(["vetrina", "rank", "trending"]).expect("valid args");
    assert!(matches!(
        cli.command,
        Some(Commands::Rank {
            command: RankCommands::Trending { limit: 6 }
        })
    ));
}

#[test]
fn rank_leaderboard_accepts_limit_override() {
    let cli = Cli::try_parse_from(["vetrina", "rank", "leaderboard", "--limit", "5"])
        .expect("valid args");
    assert!(matches!(
        cli.command,
        Some(Commands::Rank {
            command: RankCommands::Leaderboard { limit: 5 }
        })
    ));
}

#[test]
fn stats_requires_brand_flag() {
    let result = Cli::try_parse_from(["vetrina", "stats"]);
    assert!(result.is_err());
}

#[test]
fn stats_parses_brand_slug() {
    let cli =
        Cli::try_parse_from(["vetrina", "stats", "--brand", "aurora-atelier"]).expect("valid args");
    assert!(matches!(
        cli.command,
        Some(Commands::Stats { brand }) if brand == "aurora-atelier"
    ));
}
