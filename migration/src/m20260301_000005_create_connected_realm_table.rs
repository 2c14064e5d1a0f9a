use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectedRealm::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectedRealm::Id))
                    .col(string(ConnectedRealm::Region))
                    .col(string(ConnectedRealm::RealmSlug))
                    .col(string(ConnectedRealm::ConnectedRealmSlug))
                    .col(integer(ConnectedRealm::Position).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConnectedRealm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConnectedRealm {
    Table,
    Id,
    Region,
    RealmSlug,
    ConnectedRealmSlug,
    Position,
}
