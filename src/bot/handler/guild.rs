//! Guild event handlers.
//!
//! `guild_create` fires for every guild the bot is in on startup, when it joins a new guild and
//! when a guild becomes available after an outage. Each time, the guild row is upserted so
//! rank sync configuration can be attached to it.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::data::DiscordGuildRepository;

/// Handles the guild_create event by registering the guild.
///
/// Rank sync flags of an already known guild are left as configured.
///
/// # Arguments
/// - `db` - Database connection
/// - `_ctx` - Discord context (unused)
/// - `guild` - Guild data from Discord
/// - `is_new` - Whether this is a new guild join
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}",
        guild.name,
        guild_id,
        is_new
    );

    match DiscordGuildRepository::new(db)
        .upsert(guild_id, &guild.name)
        .await
    {
        Ok(stored) => {
            tracing::debug!(
                "Registered guild {} ({}) - rank sync enabled: {}, scheduled: {}",
                stored.name,
                guild_id,
                stored.rank_sync_enabled,
                stored.rank_sync_scheduled
            );
        }
        Err(e) => {
            tracing::error!("Failed to upsert guild {} ({}): {:?}", guild_id, guild.name, e);
        }
    }
}
