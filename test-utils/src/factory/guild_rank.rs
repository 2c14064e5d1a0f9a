//! Rank binding factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a binding from an in-game rank to a Discord role name.
///
/// # Arguments
/// - `db` - Database connection
/// - `wow_guild_id` - ID of the in-game guild the rank belongs to
/// - `rank_id` - In-game rank id (0 is the guild master)
/// - `discord_role` - Name of the Discord role granted for this rank
///
/// # Returns
/// - `Ok(entity::guild_rank::Model)` - Created rank binding
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_rank(
    db: &DatabaseConnection,
    wow_guild_id: i32,
    rank_id: i32,
    discord_role: &str,
) -> Result<entity::guild_rank::Model, DbErr> {
    entity::guild_rank::ActiveModel {
        wow_guild_id: ActiveValue::Set(wow_guild_id),
        rank_id: ActiveValue::Set(rank_id),
        discord_role: ActiveValue::Set(discord_role.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
