//! Discord guild repository for database operations.
//!
//! Guild rows are created when the bot sees a guild (`guild_create`) and carry the two rank
//! sync flags set by the bot operator: `rank_sync_enabled` for the on-demand commands and
//! `rank_sync_scheduled` for the background sweep.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::DiscordGuild;

pub struct DiscordGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a guild or updates its name if it already exists.
    ///
    /// Rank sync flags are left untouched on conflict so that re-joining or restarting never
    /// resets an operator's configuration.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    /// - `name`: Current guild name
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)`: The stored guild
    /// - `Err(DbErr)`: Database error during upsert
    pub async fn upsert(&self, guild_id: u64, name: &str) -> Result<DiscordGuild, DbErr> {
        let entity = entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            rank_sync_enabled: ActiveValue::Set(false),
            rank_sync_scheduled: ActiveValue::Set(false),
            last_rank_sync_at: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .update_column(entity::discord_guild::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordGuild::from_entity(entity)
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuild))`: Guild found in database
    /// - `Ok(None)`: Guild not found
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<DiscordGuild>, DbErr> {
        entity::prelude::DiscordGuild::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(DiscordGuild::from_entity)
            .transpose()
    }

    /// Gets every guild opted into the scheduled rank sync sweep, in a stable order.
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuild>)`: Guilds with `rank_sync_scheduled` set, ordered by guild ID
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_rank_sync_scheduled(&self) -> Result<Vec<DiscordGuild>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::RankSyncScheduled.eq(true))
            .order_by_asc(entity::discord_guild::Column::GuildId)
            .all(self.db)
            .await?
            .into_iter()
            .map(DiscordGuild::from_entity)
            .collect()
    }

    /// Records that a full guild rank sync just completed.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(())`: Timestamp set to now (no-op for an unknown guild)
    /// - `Err(DbErr)`: Database error during update
    pub async fn update_last_rank_sync(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordGuild::update_many()
            .col_expr(
                entity::discord_guild::Column::LastRankSyncAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
