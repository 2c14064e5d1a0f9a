use super::*;
use sea_orm::PaginatorTrait;

/// Tests upserting a guild the bot has never seen.
///
/// Expected: Ok with both rank sync flags disabled
#[tokio::test]
async fn upserts_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.upsert(123456789, "Horde Council").await?;

    assert_eq!(guild.guild_id.get(), 123456789);
    assert_eq!(guild.name, "Horde Council");
    assert!(!guild.rank_sync_enabled);
    assert!(!guild.rank_sync_scheduled);
    assert!(guild.last_rank_sync_at.is_none());

    Ok(())
}

/// Tests that upserting an existing guild only refreshes its name.
///
/// Verifies the operator's rank sync flags survive a re-join and that no duplicate row
/// is created.
///
/// Expected: Ok with name updated and flags preserved
#[tokio::test]
async fn keeps_rank_sync_flags_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("123456789")
        .name("Old Name")
        .rank_sync_enabled(true)
        .rank_sync_scheduled(true)
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.upsert(123456789, "New Name").await?;

    assert_eq!(guild.name, "New Name");
    assert!(guild.rank_sync_enabled);
    assert!(guild.rank_sync_scheduled);

    let count = entity::prelude::DiscordGuild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
