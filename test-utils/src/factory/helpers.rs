//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values increase monotonically across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild with one in-game guild and a single rank binding.
///
/// # Returns
/// - `Ok((guild, wow_guild, rank))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_rank(
    db: &DatabaseConnection,
    rank_id: i32,
    discord_role: &str,
) -> Result<
    (
        entity::discord_guild::Model,
        entity::wow_guild::Model,
        entity::guild_rank::Model,
    ),
    DbErr,
> {
    let guild = crate::factory::discord_guild::create_guild(db).await?;
    let wow_guild = crate::factory::wow_guild::create_wow_guild(db, &guild.guild_id).await?;
    let rank =
        crate::factory::guild_rank::create_guild_rank(db, wow_guild.id, rank_id, discord_role)
            .await?;

    Ok((guild, wow_guild, rank))
}
