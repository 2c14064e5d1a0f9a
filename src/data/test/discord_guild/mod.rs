use super::*;
use crate::data::DiscordGuildRepository;
use sea_orm::EntityTrait;

mod find_by_guild_id;
mod get_rank_sync_scheduled;
mod update_last_rank_sync;
mod upsert;
