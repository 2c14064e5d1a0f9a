//! Main character bindings.

use sea_orm::DbErr;
use serenity::all::{GuildId, UserId};

use crate::model::{guild::parse_guild_id, ExternalGuildKey, Region};

/// The character a member designated as authoritative for their rank in one Discord guild.
#[derive(Debug, Clone, PartialEq)]
pub struct MainCharacter {
    pub user_id: UserId,
    pub guild_id: GuildId,
    pub name: String,
    /// Home realm of the character (lowercased slug).
    pub realm_slug: String,
    pub region: Region,
    /// In-game guild the character belongs to.
    pub guild_name: String,
}

impl MainCharacter {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(MainCharacter)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Invalid user id, guild id or region
    pub fn from_entity(entity: entity::main_character::Model) -> Result<Self, DbErr> {
        let user_id = entity
            .user_id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(UserId::new)
            .ok_or_else(|| DbErr::Custom(format!("Failed to parse user_id: {}", entity.user_id)))?;

        Ok(Self {
            user_id,
            guild_id: parse_guild_id(&entity.guild_id)?,
            name: entity.name,
            realm_slug: entity.realm_slug.trim().to_lowercase(),
            region: entity.region.parse::<Region>().map_err(DbErr::Custom)?,
            guild_name: entity.guild_name,
        })
    }

    /// Key of the in-game guild this character would appear in if that guild were registered
    /// on `realm_slug`.
    pub fn guild_key_on(&self, realm_slug: &str) -> ExternalGuildKey {
        ExternalGuildKey::new(self.region, realm_slug, &self.guild_name)
    }
}
