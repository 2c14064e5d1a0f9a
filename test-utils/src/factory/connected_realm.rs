//! Connected realm reference data factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Registers `connected_realm_slug` as connected to `realm_slug` at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `region` - Region code as stored, e.g. `us`
/// - `realm_slug` - Home realm
/// - `connected_realm_slug` - Realm whose rosters are searched after the home realm
/// - `position` - Search order among the home realm's connected realms
///
/// # Returns
/// - `Ok(entity::connected_realm::Model)` - Created registration
/// - `Err(DbErr)` - Database error during insert
pub async fn create_connected_realm(
    db: &DatabaseConnection,
    region: &str,
    realm_slug: &str,
    connected_realm_slug: &str,
    position: i32,
) -> Result<entity::connected_realm::Model, DbErr> {
    entity::connected_realm::ActiveModel {
        region: ActiveValue::Set(region.to_string()),
        realm_slug: ActiveValue::Set(realm_slug.to_string()),
        connected_realm_slug: ActiveValue::Set(connected_realm_slug.to_string()),
        position: ActiveValue::Set(position),
        ..Default::default()
    }
    .insert(db)
    .await
}
