//! Recurring rank sync sweep.
//!
//! The scheduler waits until the Discord connection is ready, then alternates between sweeping
//! every guild opted into scheduled rank sync and sleeping for the configured interval. A sweep
//! runs guilds one after the other; there is never more than one sweep in flight.
//!
//! Shutdown is cooperative: the guild being synced finishes, the remaining guilds of the sweep
//! are skipped, and a sleeping scheduler wakes up and exits immediately.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::{
    data::DiscordGuildRepository,
    service::{battlenet::GameApi, discord::ChatPlatform, rank_sync::RankSyncService},
};

pub struct RankSyncScheduler {
    db: DatabaseConnection,
    chat: Arc<dyn ChatPlatform>,
    game: Arc<dyn GameApi>,
    interval: Duration,
    /// Flips to `true` once the bot is connected to Discord.
    ready: watch::Receiver<bool>,
    /// Flips to `true` when the process is shutting down.
    shutdown: watch::Receiver<bool>,
}

impl RankSyncScheduler {
    pub fn new(
        db: DatabaseConnection,
        chat: Arc<dyn ChatPlatform>,
        game: Arc<dyn GameApi>,
        interval: Duration,
        ready: watch::Receiver<bool>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            db,
            chat,
            game,
            interval,
            ready,
            shutdown,
        }
    }

    /// Runs the scheduler until shutdown is requested.
    pub async fn run(mut self) {
        tokio::select! {
            ready = wait_until(&mut self.ready) => {
                if !ready {
                    tracing::warn!("Discord connection closed before becoming ready, rank sync scheduler not started");
                    return;
                }
            }
            _ = wait_until(&mut self.shutdown) => {
                tracing::info!("Rank sync scheduler stopped before Discord became ready");
                return;
            }
        }

        tracing::info!(
            "Rank sync scheduler started, sweeping every {} seconds",
            self.interval.as_secs()
        );

        loop {
            self.sweep().await;

            if self.shutdown_requested() {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = wait_until(&mut self.shutdown) => break,
            }
        }

        tracing::info!("Rank sync scheduler stopped");
    }

    /// Syncs every scheduled guild in turn.
    ///
    /// # Returns
    /// Number of guilds whose pass was started.
    async fn sweep(&self) -> usize {
        let guilds = match DiscordGuildRepository::new(&self.db)
            .get_rank_sync_scheduled()
            .await
        {
            Ok(guilds) => guilds,
            Err(e) => {
                tracing::error!("Failed to load guilds for scheduled rank sync: {}", e);
                return 0;
            }
        };

        tracing::info!("Starting rank sync sweep over {} guilds", guilds.len());

        let service = RankSyncService::new(&self.db, self.chat.as_ref(), self.game.as_ref());
        let mut started = 0;

        for guild in guilds {
            if self.shutdown_requested() {
                tracing::info!("Shutdown requested, skipping the rest of the rank sync sweep");
                break;
            }

            tracing::info!("Doing rank sync for guild {} ({})", guild.guild_id, guild.name);
            started += 1;

            if let Err(e) = service.sync_guild(guild.guild_id).await {
                tracing::error!("Rank sync failed for guild {}: {}", guild.guild_id, e);
            }
        }

        started
    }

    fn shutdown_requested(&self) -> bool {
        *self.shutdown.borrow()
    }
}

/// Waits until the watched flag is `true`.
///
/// Returns `false` if the sender was dropped without ever setting it.
async fn wait_until(rx: &mut watch::Receiver<bool>) -> bool {
    rx.wait_for(|value| *value).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::rank_sync::test::{create_horde_guild, FakeChatPlatform, FakeGameApi};
    use test_utils::builder::TestBuilder;
    use tokio::time::{sleep, timeout};

    const HOUR: Duration = Duration::from_secs(3600);

    /// Polls until the game API saw at least one request.
    async fn wait_for_requests(game: &FakeGameApi) {
        timeout(Duration::from_secs(5), async {
            while game.requests().is_empty() {
                sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("sweep never reached the game API");
    }

    #[tokio::test]
    async fn sweeps_only_after_ready_and_stops_on_shutdown() {
        let test = TestBuilder::new()
            .with_rank_sync_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let guild_id = create_horde_guild(&db).await.unwrap();

        let chat = Arc::new(FakeChatPlatform::new(guild_id));
        let game = Arc::new(FakeGameApi::default());
        let (ready_tx, ready_rx) = watch::channel(false);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let scheduler =
            RankSyncScheduler::new(db, chat, game.clone(), HOUR, ready_rx, shutdown_rx);
        let handle = tokio::spawn(scheduler.run());

        sleep(Duration::from_millis(50)).await;
        assert!(game.requests().is_empty());

        ready_tx.send(true).unwrap();
        wait_for_requests(&game).await;

        shutdown_tx.send(true).unwrap();
        timeout(Duration::from_secs(5), handle)
            .await
            .expect("sleeping scheduler did not wake up on shutdown")
            .unwrap();

        assert_eq!(game.requests().len(), 1);
    }

    #[tokio::test]
    async fn exits_when_shut_down_before_ready() {
        let test = TestBuilder::new()
            .with_rank_sync_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();

        let (_ready_tx, ready_rx) = watch::channel(false);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let chat = Arc::new(FakeChatPlatform::new(serenity::all::GuildId::new(1)));
        let game = Arc::new(FakeGameApi::default());

        let scheduler =
            RankSyncScheduler::new(db, chat, game.clone(), HOUR, ready_rx, shutdown_rx);
        let handle = tokio::spawn(scheduler.run());

        shutdown_tx.send(true).unwrap();
        timeout(Duration::from_secs(5), handle)
            .await
            .expect("scheduler did not exit")
            .unwrap();

        assert!(game.requests().is_empty());
    }

    #[tokio::test]
    async fn skips_remaining_guilds_once_shutdown_requested() {
        let test = TestBuilder::new()
            .with_rank_sync_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let guild_id = create_horde_guild(&db).await.unwrap();
        create_horde_guild(&db).await.unwrap();

        let (_ready_tx, ready_rx) = watch::channel(true);
        let (_shutdown_tx, shutdown_rx) = watch::channel(true);
        let chat = Arc::new(FakeChatPlatform::new(guild_id));
        let game = Arc::new(FakeGameApi::default());

        let scheduler = RankSyncScheduler::new(db, chat, game.clone(), HOUR, ready_rx, shutdown_rx);

        assert_eq!(scheduler.sweep().await, 0);
        assert!(game.requests().is_empty());
    }

    #[tokio::test]
    async fn sweep_covers_every_scheduled_guild() {
        let test = TestBuilder::new()
            .with_rank_sync_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let guild_id = create_horde_guild(&db).await.unwrap();
        create_horde_guild(&db).await.unwrap();

        let (_ready_tx, ready_rx) = watch::channel(true);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let chat = Arc::new(FakeChatPlatform::new(guild_id));
        let game = Arc::new(FakeGameApi::default());

        let scheduler = RankSyncScheduler::new(db, chat, game.clone(), HOUR, ready_rx, shutdown_rx);

        assert_eq!(scheduler.sweep().await, 2);
        assert_eq!(game.requests().len(), 2);
    }
}
