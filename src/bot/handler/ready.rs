//! Ready event handler.
//!
//! The `ready` event fires after the gateway handshake, including after reconnects. The first
//! one releases the rank sync scheduler, which waits for it before its first sweep.

use serenity::all::{Context, Ready};
use tokio::sync::watch;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ready_tx` - Readiness flag watched by the rank sync scheduler
/// - `ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ready_tx: &watch::Sender<bool>, _ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ready_tx.send_replace(true);
}
