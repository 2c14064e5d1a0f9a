use super::*;
use chrono::Utc;

/// Tests recording the completion time of a guild sync.
///
/// Expected: Ok with last_rank_sync_at set to roughly now, other guilds untouched
#[tokio::test]
async fn sets_last_rank_sync_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("10")
        .build()
        .await?;
    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("20")
        .build()
        .await?;

    let before = Utc::now();
    let repo = DiscordGuildRepository::new(db);
    repo.update_last_rank_sync(10).await?;

    let synced = entity::prelude::DiscordGuild::find_by_id("10".to_string())
        .one(db)
        .await?
        .unwrap();
    let untouched = entity::prelude::DiscordGuild::find_by_id("20".to_string())
        .one(db)
        .await?
        .unwrap();

    let synced_at = synced.last_rank_sync_at.expect("sync time recorded");
    assert!(synced_at >= before - chrono::Duration::seconds(1));
    assert!(untouched.last_rank_sync_at.is_none());

    Ok(())
}
