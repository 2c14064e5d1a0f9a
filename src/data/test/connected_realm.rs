use super::*;
use crate::data::ConnectedRealmRepository;

/// Tests that registrations come back in position order regardless of insert order.
///
/// Expected: Ok with registrations sorted by position
#[tokio::test]
async fn returns_registrations_in_position_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConnectedRealm)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_connected_realm(db, "us", "stormrage", "burning-blade", 2).await?;
    factory::create_connected_realm(db, "us", "stormrage", "area-52", 1).await?;

    let repo = ConnectedRealmRepository::new(db);
    let realms = repo.get_all().await?;

    let slugs: Vec<&str> = realms
        .iter()
        .map(|r| r.connected_realm_slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["area-52", "burning-blade"]);

    Ok(())
}

/// Tests that a registration in an unknown region is skipped.
///
/// Expected: Ok with only the valid registration
#[tokio::test]
async fn skips_invalid_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ConnectedRealm)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_connected_realm(db, "cn", "stormrage", "burning-blade", 1).await?;
    factory::create_connected_realm(db, "us", "stormrage", "area-52", 2).await?;

    let repo = ConnectedRealmRepository::new(db);
    let realms = repo.get_all().await?;

    assert_eq!(realms.len(), 1);
    assert_eq!(realms[0].connected_realm_slug, "area-52");

    Ok(())
}
