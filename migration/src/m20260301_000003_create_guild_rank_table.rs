use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_wow_guild_table::WowGuild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildRank::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildRank::Id))
                    .col(integer(GuildRank::WowGuildId))
                    .col(integer(GuildRank::RankId))
                    .col(string(GuildRank::DiscordRole))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_rank_wow_guild_id")
                            .from(GuildRank::Table, GuildRank::WowGuildId)
                            .to(WowGuild::Table, WowGuild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One binding per rank of a given in-game guild
        manager
            .create_index(
                Index::create()
                    .name("idx_guild_rank_wow_guild_rank")
                    .table(GuildRank::Table)
                    .col(GuildRank::WowGuildId)
                    .col(GuildRank::RankId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildRank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildRank {
    Table,
    Id,
    WowGuildId,
    RankId,
    DiscordRole,
}
