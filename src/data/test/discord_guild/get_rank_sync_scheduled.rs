use super::*;

/// Tests that only guilds opted into the scheduled sweep are returned.
///
/// Expected: Ok with the two scheduled guilds, ordered by guild id
#[tokio::test]
async fn returns_only_scheduled_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("300")
        .rank_sync_scheduled(true)
        .build()
        .await?;
    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("200")
        .rank_sync_scheduled(false)
        .build()
        .await?;
    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("100")
        .rank_sync_enabled(false)
        .rank_sync_scheduled(true)
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let guilds = repo.get_rank_sync_scheduled().await?;

    let ids: Vec<u64> = guilds.iter().map(|g| g.guild_id.get()).collect();
    assert_eq!(ids, vec![100, 300]);

    Ok(())
}

/// Tests the sweep with no scheduled guilds.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_scheduled_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild(db).await?;

    let repo = DiscordGuildRepository::new(db);
    let guilds = repo.get_rank_sync_scheduled().await?;

    assert!(guilds.is_empty());

    Ok(())
}
