//! In-game guild factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for in-game guilds attached to a Discord guild.
///
/// Defaults to a US guild on `stormrage` with a unique name.
pub struct WowGuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    region: String,
    realm_slug: String,
    guild_name: String,
    is_default: bool,
}

impl<'a> WowGuildFactory<'a> {
    /// Creates a new WowGuildFactory with default values.
    ///
    /// Defaults:
    /// - region: `"us"`
    /// - realm_slug: `"stormrage"`
    /// - guild_name: `"guild {id}"`
    /// - is_default: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild the in-game guild is attached to
    ///
    /// # Returns
    /// - `WowGuildFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            region: "us".to_string(),
            realm_slug: "stormrage".to_string(),
            guild_name: format!("guild {}", next_id()),
            is_default: true,
        }
    }

    /// Sets the guild's region.
    ///
    /// # Arguments
    /// - `region` - Region code as stored, e.g. `us` or `eu`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the guild's realm.
    ///
    /// # Arguments
    /// - `realm_slug` - Realm slug, e.g. `stormrage`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn realm_slug(mut self, realm_slug: impl Into<String>) -> Self {
        self.realm_slug = realm_slug.into();
        self
    }

    /// Sets the in-game guild name.
    ///
    /// # Arguments
    /// - `guild_name` - In-game guild name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_name(mut self, guild_name: impl Into<String>) -> Self {
        self.guild_name = guild_name.into();
        self
    }

    /// Sets whether this is the Discord guild's default in-game guild.
    ///
    /// # Arguments
    /// - `is_default` - `true` for the default guild
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Builds and inserts the in-game guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::wow_guild::Model)` - Created in-game guild
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::wow_guild::Model, DbErr> {
        entity::wow_guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            region: ActiveValue::Set(self.region),
            realm_slug: ActiveValue::Set(self.realm_slug),
            guild_name: ActiveValue::Set(self.guild_name),
            is_default: ActiveValue::Set(self.is_default),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an in-game guild with default values for the given Discord guild.
pub async fn create_wow_guild(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::wow_guild::Model, DbErr> {
    WowGuildFactory::new(db, guild_id).build().await
}
