use super::*;

/// Tests finding an existing guild.
///
/// Expected: Ok(Some) with matching guild
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("555")
        .name("Found")
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.find_by_guild_id(555).await?;

    assert!(guild.is_some());
    assert_eq!(guild.unwrap().name, "Found");

    Ok(())
}

/// Tests looking up a guild that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.find_by_guild_id(999).await?;

    assert!(guild.is_none());

    Ok(())
}
