use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_discord_guild_table::DiscordGuild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MainCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(MainCharacter::Id))
                    .col(string(MainCharacter::UserId))
                    .col(string(MainCharacter::GuildId))
                    .col(string(MainCharacter::Name))
                    .col(string(MainCharacter::RealmSlug))
                    .col(string(MainCharacter::Region))
                    .col(string(MainCharacter::GuildName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_main_character_guild_id")
                            .from(MainCharacter::Table, MainCharacter::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_main_character_user_guild")
                    .table(MainCharacter::Table)
                    .col(MainCharacter::UserId)
                    .col(MainCharacter::GuildId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MainCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MainCharacter {
    Table,
    Id,
    UserId,
    GuildId,
    Name,
    RealmSlug,
    Region,
    GuildName,
}
