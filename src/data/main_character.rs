use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::MainCharacter;

/// Read access to members' main character bindings.
pub struct MainCharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MainCharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the main character a user selected for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(MainCharacter))`: The user has a main character in this guild
    /// - `Ok(None)`: No main character, the user is not governed by rank sync
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_main(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<Option<MainCharacter>, DbErr> {
        entity::prelude::MainCharacter::find()
            .filter(entity::main_character::Column::UserId.eq(user_id.to_string()))
            .filter(entity::main_character::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(MainCharacter::from_entity)
            .transpose()
    }

    /// Gets every main character binding for a guild.
    ///
    /// Used by guild sync to resolve all members with one query instead of one per member.
    /// Rows that fail conversion are logged and left out so one bad binding cannot stop the
    /// whole guild pass.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID (u64)
    ///
    /// # Returns
    /// - `Ok(Vec<MainCharacter>)`: Every valid binding of the guild
    /// - `Err(DbErr)`: Database error during query
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<MainCharacter>, DbErr> {
        let rows = entity::prelude::MainCharacter::find()
            .filter(entity::main_character::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let (guild, user) = (row.guild_id.clone(), row.user_id.clone());
                MainCharacter::from_entity(row)
                    .map_err(|e| {
                        tracing::warn!(
                            "Skipping invalid main character of user {} in guild {}: {}",
                            user,
                            guild,
                            e
                        );
                    })
                    .ok()
            })
            .collect())
    }
}
