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
                    .table(WowGuild::Table)
                    .if_not_exists()
                    .col(pk_auto(WowGuild::Id))
                    .col(string(WowGuild::GuildId))
                    .col(string(WowGuild::Region))
                    .col(string(WowGuild::RealmSlug))
                    .col(string(WowGuild::GuildName))
                    .col(boolean(WowGuild::IsDefault).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wow_guild_guild_id")
                            .from(WowGuild::Table, WowGuild::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WowGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WowGuild {
    Table,
    Id,
    GuildId,
    Region,
    RealmSlug,
    GuildName,
    IsDefault,
}
