//! Rank sync prefix commands.
//!
//! Commands are recognised after the configured prefix (`!sync`) or a mention of the bot
//! (`@rankbot sync`). Replies always go to the author by direct message.

use serenity::all::{Context, CreateMessage, GuildId, Message, UserId};
use std::sync::Arc;

use crate::{
    bot::handler::Handler,
    data::DiscordGuildRepository,
    error::AppError,
    service::{discord::SerenityPlatform, rank_sync::RankSyncService},
};

const MEMBER_SYNC_STARTED: &str = "Your rank is being synced. It may take some minutes to apply.";

const GUILD_SYNC_STARTED: &str = "Guild Rank Sync started. It may take some minutes to apply. \
     Check the server Audit log for any changes.";

const NOT_ENABLED: &str = "The Rank System is not enabled. Please ask bot author to enable it.";

const SYNC_HELP: &str = "The Sync system allows you to have your Discord Rank Synced to your \
     ingame WoW guild rank.\n\
     For Server owners: configure the WoW Servers and the WoW Ranks of your server, then ask \
     the bot author to enable the Rank System for it.\n\
     For Users: link your Battle.net account and select which character is your main \
     character in the Discord server you want, then run the sync command there.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Sync the author's own rank.
    Sync,
    /// Sync every member of the guild.
    SyncGuild,
    /// Explain the rank sync system.
    SyncHelp,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sync" => Some(Command::Sync),
            "syncguild" => Some(Command::SyncGuild),
            "synchelp" => Some(Command::SyncHelp),
            _ => None,
        }
    }

    fn guild_only(&self) -> bool {
        !matches!(self, Command::SyncHelp)
    }
}

/// Parses a message into a command.
///
/// Accepts `<prefix><name>` or a bot mention (`<@id>` / `<@!id>`) followed by the name.
/// Anything after the command name is ignored.
pub fn parse(content: &str, prefix: &str, bot_id: UserId) -> Option<Command> {
    let content = content.trim_start();

    let rest = if let Some(rest) = strip_mention(content, bot_id) {
        rest.trim_start()
    } else if !prefix.is_empty() {
        let rest = content.strip_prefix(prefix)?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        rest
    } else {
        return None;
    };

    let name = rest.split_whitespace().next()?;

    Command::from_name(name)
}

fn strip_mention(content: &str, bot_id: UserId) -> Option<&str> {
    let plain = format!("<@{}>", bot_id);
    let nick = format!("<@!{}>", bot_id);

    content
        .strip_prefix(&plain)
        .or_else(|| content.strip_prefix(&nick))
}

/// Runs a parsed command and replies to its author.
pub async fn run(handler: &Handler, ctx: &Context, message: &Message, command: Command) {
    let guild_id = match (command.guild_only(), message.guild_id) {
        (true, None) => {
            tracing::debug!(
                "Ignoring {:?} from {} outside of a guild",
                command,
                message.author.id
            );
            return;
        }
        (_, guild_id) => guild_id,
    };

    let reply = match (command, guild_id) {
        (Command::SyncHelp, _) => Ok(SYNC_HELP),
        (Command::Sync, Some(guild_id)) => {
            start_sync(handler, ctx, guild_id, Some(message.author.id)).await
        }
        (Command::SyncGuild, Some(guild_id)) => start_sync(handler, ctx, guild_id, None).await,
        (_, None) => return,
    };

    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(
                "Failed to run {:?} for {} in guild {:?}: {}",
                command,
                message.author.id,
                guild_id,
                e
            );
            return;
        }
    };

    if let Err(e) = message
        .author
        .direct_message(ctx, CreateMessage::new().content(reply))
        .await
    {
        tracing::warn!("Failed to send DM to {}: {}", message.author.id, e);
    }
}

/// Starts a member or guild sync in the background if rank sync is enabled for the guild.
///
/// # Returns
/// - `Ok(&str)`: Reply for the author, either "started" or "not enabled"
/// - `Err(AppError)`: Failed to read the guild configuration
async fn start_sync(
    handler: &Handler,
    ctx: &Context,
    guild_id: GuildId,
    user_id: Option<UserId>,
) -> Result<&'static str, AppError> {
    let enabled = DiscordGuildRepository::new(&handler.db)
        .find_by_guild_id(guild_id.get())
        .await?
        .is_some_and(|guild| guild.rank_sync_enabled);

    if !enabled {
        return Ok(NOT_ENABLED);
    }

    let db = handler.db.clone();
    let game = Arc::clone(&handler.game_api);
    let chat = SerenityPlatform::new(ctx.http.clone());

    tokio::spawn(async move {
        let service = RankSyncService::new(&db, &chat, game.as_ref());

        let result = match user_id {
            Some(user_id) => service.sync_member(guild_id, user_id).await.map(|outcome| {
                tracing::info!(
                    "On-demand rank sync for {} in guild {}: {:?}",
                    user_id,
                    guild_id,
                    outcome
                );
            }),
            None => service.sync_guild(guild_id).await.map(|_| ()),
        };

        if let Err(e) = result {
            tracing::error!("On-demand rank sync failed in guild {}: {}", guild_id, e);
        }
    });

    Ok(match user_id {
        Some(_) => MEMBER_SYNC_STARTED,
        None => GUILD_SYNC_STARTED,
    })
}
