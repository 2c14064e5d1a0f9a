//! Discord guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test Discord guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_guild::DiscordGuildFactory;
///
/// let guild = DiscordGuildFactory::new(&db)
///     .guild_id("987654321")
///     .rank_sync_scheduled(true)
///     .build()
///     .await?;
/// ```
pub struct DiscordGuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    rank_sync_enabled: bool,
    rank_sync_scheduled: bool,
}

impl<'a> DiscordGuildFactory<'a> {
    /// Creates a new DiscordGuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: next unique id
    /// - name: `"Guild {id}"`
    /// - rank_sync_enabled: `true`
    /// - rank_sync_scheduled: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            name: format!("Guild {}", id),
            rank_sync_enabled: true,
            rank_sync_scheduled: false,
        }
    }

    /// Sets the guild ID.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the guild name.
    ///
    /// # Arguments
    /// - `name` - Display name for the guild
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the rank sync commands are enabled.
    ///
    /// # Arguments
    /// - `enabled` - `true` to allow `sync` and `syncguild`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rank_sync_enabled(mut self, enabled: bool) -> Self {
        self.rank_sync_enabled = enabled;
        self
    }

    /// Sets whether the guild is part of the scheduled sweep.
    ///
    /// # Arguments
    /// - `scheduled` - `true` to opt into the background sweep
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rank_sync_scheduled(mut self, scheduled: bool) -> Self {
        self.rank_sync_scheduled = scheduled;
        self
    }

    /// Builds and inserts the guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discord_guild::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_guild::Model, DbErr> {
        entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            rank_sync_enabled: ActiveValue::Set(self.rank_sync_enabled),
            rank_sync_scheduled: ActiveValue::Set(self.rank_sync_scheduled),
            last_rank_sync_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord guild with default values.
///
/// Shorthand for `DiscordGuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::discord_guild::Model, DbErr> {
    DiscordGuildFactory::new(db).build().await
}
