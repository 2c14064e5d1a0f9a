//! Main character factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for a member's main character binding.
///
/// Defaults to a uniquely named US character on `stormrage`.
pub struct MainCharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    name: String,
    realm_slug: String,
    region: String,
    guild_name: String,
}

impl<'a> MainCharacterFactory<'a> {
    /// Creates a new MainCharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character{id}"`
    /// - realm_slug: `"stormrage"`
    /// - region: `"us"`
    /// - guild_name: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild the binding belongs to
    /// - `user_id` - Discord user owning the character
    ///
    /// # Returns
    /// - `MainCharacterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: &str, user_id: &str) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            guild_id: guild_id.to_string(),
            name: format!("Character{}", next_id()),
            realm_slug: "stormrage".to_string(),
            region: "us".to_string(),
            guild_name: String::new(),
        }
    }

    /// Sets the character name.
    ///
    /// # Arguments
    /// - `name` - In-game character name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the character's home realm.
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

    /// Sets the character's region.
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

    /// Sets the in-game guild the character belongs to.
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

    /// Builds and inserts the main character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::main_character::Model)` - Created binding
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::main_character::Model, DbErr> {
        entity::main_character::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            realm_slug: ActiveValue::Set(self.realm_slug),
            region: ActiveValue::Set(self.region),
            guild_name: ActiveValue::Set(self.guild_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a main character for a user of a guild, member of the given in-game guild.
pub async fn create_main_character(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    guild_name: &str,
) -> Result<entity::main_character::Model, DbErr> {
    MainCharacterFactory::new(db, guild_id, user_id)
        .guild_name(guild_name)
        .build()
        .await
}
