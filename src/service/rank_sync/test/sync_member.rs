use super::*;
use crate::service::rank_sync::reconcile::{RankOutcome, RolePlan};
use sea_orm::DbErr;

/// Tests on-demand sync of a single member.
///
/// Verifies that other members of the guild are not touched.
///
/// Expected: Ok(Some(Planned)) with Officer granted to the requesting member only
#[tokio::test]
async fn syncs_only_requesting_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rank_sync_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild_id = create_horde_guild(db).await?;
    create_thrall(db, guild_id).await?;
    factory::main_character::MainCharacterFactory::new(db, &guild_id.to_string(), "43")
        .name("Saurfang")
        .realm_slug("stormrage")
        .guild_name("Horde")
        .build()
        .await?;

    let chat = FakeChatPlatform::new(guild_id)
        .with_member(42, "thrall", &[MEMBER_ROLE])
        .with_member(43, "saurfang", &[]);
    let game = FakeGameApi::default()
        .with_member("stormrage", "Horde", "Thrall", "stormrage", 3)
        .with_member("stormrage", "Horde", "Saurfang", "stormrage", 3);

    let service = RankSyncService::new(db, &chat, &game);
    let outcome = service
        .sync_member(guild_id, UserId::new(42))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Some(RankOutcome::Planned(RolePlan {
            remove: vec![RoleId::new(MEMBER_ROLE)],
            add: Some(RoleId::new(OFFICER_ROLE)),
        }))
    );
    assert_eq!(chat.member_roles(42), vec![RoleId::new(OFFICER_ROLE)]);
    assert!(chat.member_roles(43).is_empty());

    Ok(())
}

/// Tests on-demand sync for a member without a main character.
///
/// Expected: Ok(Some(NoMainCharacter)) and no mutation
#[tokio::test]
async fn member_without_main_is_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rank_sync_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild_id = create_horde_guild(db).await?;

    let chat = FakeChatPlatform::new(guild_id).with_member(42, "thrall", &[MEMBER_ROLE]);
    let game = FakeGameApi::default().with_member("stormrage", "Horde", "Thrall", "stormrage", 3);

    let service = RankSyncService::new(db, &chat, &game);
    let outcome = service
        .sync_member(guild_id, UserId::new(42))
        .await
        .unwrap();

    assert_eq!(outcome, Some(RankOutcome::NoMainCharacter));
    assert!(chat.calls().is_empty());

    Ok(())
}

/// Tests on-demand sync when the guild has no rank bindings.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_configured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rank_sync_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = GuildId::new(guild.guild_id.parse().unwrap());

    let chat = FakeChatPlatform::new(guild_id).with_member(42, "thrall", &[]);
    let game = FakeGameApi::default();

    let service = RankSyncService::new(db, &chat, &game);
    let outcome = service
        .sync_member(guild_id, UserId::new(42))
        .await
        .unwrap();

    assert!(outcome.is_none());

    Ok(())
}
