//! Discord guild configuration as seen by the rank sync.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serenity::all::GuildId;

/// A Discord guild the bot is in, with its rank sync flags.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    pub guild_id: GuildId,
    pub name: String,
    /// Allows the `sync` and `syncguild` commands.
    pub rank_sync_enabled: bool,
    /// Includes the guild in the scheduled background sweep.
    pub rank_sync_scheduled: bool,
    pub last_rank_sync_at: Option<DateTime<Utc>>,
}

impl DiscordGuild {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored guild_id is not a valid snowflake
    pub fn from_entity(entity: entity::discord_guild::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_guild_id(&entity.guild_id)?,
            name: entity.name,
            rank_sync_enabled: entity.rank_sync_enabled,
            rank_sync_scheduled: entity.rank_sync_scheduled,
            last_rank_sync_at: entity.last_rank_sync_at,
        })
    }
}

/// Parses a stored Discord guild id.
pub(crate) fn parse_guild_id(value: &str) -> Result<GuildId, DbErr> {
    value
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(GuildId::new)
        .ok_or_else(|| DbErr::Custom(format!("Failed to parse guild_id: {}", value)))
}
