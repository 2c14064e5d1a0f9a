use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::watch;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::battlenet::GameApi;

/// Builds the Discord client without connecting it.
///
/// # Arguments
/// - `config`: Bot token and command prefix
/// - `db`: Database connection shared with the event handler
/// - `game_api`: Game API used by on-demand syncs
/// - `ready`: Set to `true` by the ready handler once the gateway is connected
///
/// # Returns
/// - `Ok((Client, Arc<Http>))`: The client and its HTTP handle, shared with the scheduler
/// - `Err(AppError::DiscordErr)`: Invalid token or client construction failure
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    game_api: Arc<dyn GameApi>,
    ready: watch::Sender<bool>,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, game_api, config.command_prefix.clone(), ready);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and runs until the shard manager shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
