mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;
use tokio::sync::watch;

use crate::{
    config::Config,
    error::AppError,
    scheduler::RankSyncScheduler,
    service::{
        battlenet::{BattleNetClient, GameApi},
        discord::{ChatPlatform, SerenityPlatform},
    },
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let game_api: Arc<dyn GameApi> = Arc::new(BattleNetClient::new(
        http_client,
        &config.battlenet_client_id,
        &config.battlenet_client_secret,
        &config.battlenet_token_url,
    )?);

    let (ready_tx, ready_rx) = watch::channel(false);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), game_api.clone(), ready_tx).await?;

    let chat: Arc<dyn ChatPlatform> = Arc::new(SerenityPlatform::new(discord_http));
    let scheduler = RankSyncScheduler::new(
        db,
        chat,
        game_api,
        config.rank_sync_interval,
        ready_rx,
        shutdown_rx,
    );
    let scheduler_handle = tokio::spawn(scheduler.run());

    let shard_manager = bot_client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutdown signal received, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    let result = bot::start::start_bot(bot_client).await;
    if let Err(ref e) = result {
        tracing::error!("Discord bot error: {}", e);
    }

    shutdown_tx.send_replace(true);
    if let Err(e) = scheduler_handle.await {
        tracing::error!("Rank sync scheduler task failed: {}", e);
    }

    tracing::info!("Shut down");

    result
}
