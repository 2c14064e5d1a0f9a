//! Rank bindings: in-game guild rank → Discord role name.

use sea_orm::DbErr;
use serenity::all::GuildId;

use crate::model::{guild::parse_guild_id, Region};

/// Identifies an in-game guild: (region, realm slug, guild name).
///
/// Realm slug and guild name are stored lowercased so that keys built from configuration,
/// API responses and character records compare equal regardless of capitalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExternalGuildKey {
    pub region: Region,
    pub realm_slug: String,
    pub guild_name: String,
}

impl ExternalGuildKey {
    pub fn new(region: Region, realm_slug: &str, guild_name: &str) -> Self {
        Self {
            region,
            realm_slug: realm_slug.trim().to_lowercase(),
            guild_name: guild_name.trim().to_lowercase(),
        }
    }
}

/// Admin-configured mapping from an in-game rank to a Discord role name.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRankBinding {
    /// Discord guild owning the binding.
    pub guild_id: GuildId,
    pub external_guild: ExternalGuildKey,
    /// In-game rank index (0 is the guild master).
    pub rank_id: u8,
    /// Name of the Discord role granted for this rank.
    pub discord_role: String,
}

impl GuildRankBinding {
    /// Converts a rank row and its owning in-game guild row into a binding.
    ///
    /// # Returns
    /// - `Ok(GuildRankBinding)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Invalid guild id, region or out-of-range rank id
    pub fn from_entity(
        rank: entity::guild_rank::Model,
        wow_guild: entity::wow_guild::Model,
    ) -> Result<Self, DbErr> {
        let region = wow_guild
            .region
            .parse::<Region>()
            .map_err(DbErr::Custom)?;

        let rank_id = u8::try_from(rank.rank_id)
            .map_err(|e| DbErr::Custom(format!("Invalid rank_id {}: {}", rank.rank_id, e)))?;

        Ok(Self {
            guild_id: parse_guild_id(&wow_guild.guild_id)?,
            external_guild: ExternalGuildKey::new(
                region,
                &wow_guild.realm_slug,
                &wow_guild.guild_name,
            ),
            rank_id,
            discord_role: rank.discord_role,
        })
    }
}
