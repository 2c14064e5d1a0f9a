use serenity::all::{Context, Message};

use crate::bot::{command, handler::Handler};

/// Handle message creation in a guild channel or DM
///
/// Dispatches recognised rank sync commands; everything else is ignored.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let bot_id = ctx.cache.current_user().id;

    let Some(command) = command::parse(&message.content, &handler.prefix, bot_id) else {
        return;
    };

    tracing::debug!(
        "Command {:?} from {} ({}) in guild {:?}",
        command,
        message.author.name,
        message.author.id,
        message.guild_id
    );

    command::run(handler, &ctx, &message, command).await;
}
