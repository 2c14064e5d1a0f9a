use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::GuildRankBinding;

/// Read access to rank bindings and the in-game guilds they belong to.
pub struct GuildRankRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRankRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rank bindings configured for a Discord guild.
    ///
    /// Each binding is joined with its in-game guild so the caller gets the full
    /// (region, realm, guild name) reference.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID (u64)
    ///
    /// # Returns
    /// - `Ok(Vec<GuildRankBinding>)`: Bindings, empty when rank sync is not configured
    /// - `Err(DbErr)`: Database error during query
    ///
    /// Rows that fail conversion (unknown region, out-of-range rank) are logged and skipped.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<GuildRankBinding>, DbErr> {
        let rows = entity::prelude::GuildRank::find()
            .find_also_related(entity::prelude::WowGuild)
            .filter(entity::wow_guild::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::guild_rank::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(rank, wow_guild)| {
                let wow_guild = wow_guild?;
                let (rank_row, wow_guild_row) = (rank.id, wow_guild.id);
                GuildRankBinding::from_entity(rank, wow_guild)
                    .map_err(|e| {
                        tracing::warn!(
                            "Skipping invalid rank binding {} (wow guild {}) in guild {}: {}",
                            rank_row,
                            wow_guild_row,
                            guild_id,
                            e
                        );
                    })
                    .ok()
            })
            .collect())
    }
}
