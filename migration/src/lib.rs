pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_discord_guild_table;
mod m20260301_000002_create_wow_guild_table;
mod m20260301_000003_create_guild_rank_table;
mod m20260301_000004_create_main_character_table;
mod m20260301_000005_create_connected_realm_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_discord_guild_table::Migration),
            Box::new(m20260301_000002_create_wow_guild_table::Migration),
            Box::new(m20260301_000003_create_guild_rank_table::Migration),
            Box::new(m20260301_000004_create_main_character_table::Migration),
            Box::new(m20260301_000005_create_connected_realm_table::Migration),
        ]
    }
}
