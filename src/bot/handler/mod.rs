use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

use crate::service::battlenet::GameApi;

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub game_api: Arc<dyn GameApi>,
    pub prefix: String,
    pub ready: watch::Sender<bool>,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        game_api: Arc<dyn GameApi>,
        prefix: String,
        ready: watch::Sender<bool>,
    ) -> Self {
        Self {
            db,
            game_api,
            prefix,
            ready,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a message is sent in a channel or DM
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
