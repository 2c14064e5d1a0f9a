use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod connected_realm;
mod discord_guild;
