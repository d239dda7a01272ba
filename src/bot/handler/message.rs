//! Message event handler: relay commands and forwarding.
//!
//! Every guild message is either a relay command, which is executed and answered in the
//! same channel, or a candidate for forwarding to the guild's output channel. Command
//! messages are never forwarded. Discord API failures are logged and dropped.

use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, GuildId, Message};

use crate::{
    bot::handler::send_quiet,
    model::{
        command::RelayCommand,
        identity::{Actor, GuildSnapshot, Identifiable, RoleBearer},
        message::{IncomingMessage, RelayAction},
    },
    service::{
        command::{CommandInvocation, CommandService},
        message_relay::{render_forward, MessageRelay},
        relay_config::RelayConfigService,
    },
};

/// Handles the message event for every message the bot can see.
///
/// The bot's own messages are dropped first. A guild message starting with the command
/// prefix is executed as a relay command and answered in the same channel; any other
/// message is forwarded if its channel is watched and the guild has an output channel.
///
/// # Arguments
/// - `relay_config` - Relay configuration store
/// - `command_prefix` - Prefix that marks a relay command
/// - `ctx` - Discord context for cache access and sending
/// - `message` - The created message
pub async fn handle_message(
    relay_config: &RelayConfigService,
    command_prefix: &str,
    ctx: Context,
    message: Message,
) {
    let bot_id = ctx.cache.current_user().id.get();

    if message.author.id.get() == bot_id {
        return;
    }

    if let Some(guild_id) = message.guild_id {
        if let Some(command) = RelayCommand::parse(command_prefix, &message.content) {
            handle_command(relay_config, &ctx, guild_id, &message, command).await;
            return;
        }
    }

    let incoming = IncomingMessage::from(&message);

    let RelayAction::Forward {
        content,
        target_channel_id,
    } = MessageRelay::new(relay_config, bot_id).handle_incoming(&incoming)
    else {
        return;
    };

    let forwarded = render_forward(&incoming.author_name, incoming.channel_id, &content);

    if let Err(e) = send_quiet(&ctx, ChannelId::new(target_channel_id), forwarded).await {
        tracing::error!(
            "Failed to relay message from channel {} to channel {}: {:?}",
            incoming.channel_id,
            target_channel_id,
            e
        );
    } else {
        tracing::debug!(
            "Relayed message from channel {} to channel {}",
            incoming.channel_id,
            target_channel_id
        );
    }
}

/// Executes a relay command and replies with its outcome.
async fn handle_command(
    relay_config: &RelayConfigService,
    ctx: &Context,
    guild_id: GuildId,
    message: &Message,
    command: RelayCommand,
) {
    let guild = match guild_snapshot(ctx, guild_id).await {
        Ok(guild) => guild,
        Err(e) => {
            tracing::error!("Failed to load guild {} for command: {:?}", guild_id, e);
            return;
        }
    };

    let actor = command_actor(ctx, guild_id, message).await;
    let invocation = CommandInvocation {
        guild: &guild,
        channel_id: message.channel_id.get(),
        actor: &actor,
    };

    let reply = match CommandService::new(relay_config).execute(&command, &invocation) {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(
                "Rejected {} command from user {} in guild {}: {}",
                command.name(),
                actor.id,
                guild_id,
                e
            );
            e.into_reply()
        }
    };

    if let Err(e) = send_quiet(ctx, message.channel_id, reply).await {
        tracing::error!(
            "Failed to reply to {} command in channel {}: {:?}",
            command.name(),
            message.channel_id,
            e
        );
    }
}

/// Copies the guild's owner, roles and channels out of the cache, falling back to the API.
///
/// The cache guard is released before any await.
async fn guild_snapshot(ctx: &Context, guild_id: GuildId) -> Result<GuildSnapshot, serenity::Error> {
    let cached = ctx
        .cache
        .guild(guild_id)
        .map(|guild| GuildSnapshot::from(&*guild));

    if let Some(snapshot) = cached {
        return Ok(snapshot);
    }

    let guild = guild_id.to_partial_guild(&ctx.http).await?;
    let channels = guild_id.channels(&ctx.http).await?;

    let mut snapshot = GuildSnapshot::from(&guild);
    snapshot.channel_ids = channels.keys().map(|channel| channel.get()).collect();

    Ok(snapshot)
}

/// Builds the acting user from the message's member data.
///
/// Fetches the member when the gateway did not attach it. If that fails too the actor
/// has no roles, which still lets the guild owner through.
async fn command_actor(ctx: &Context, guild_id: GuildId, message: &Message) -> Actor {
    if let Some(member) = message.member.as_deref() {
        return Actor::from_message_author(&message.author, Some(member));
    }

    match guild_id.member(ctx, message.author.id).await {
        Ok(member) => Actor::new(Identifiable::id(&member), RoleBearer::role_ids(&member)),
        Err(e) => {
            tracing::warn!(
                "Failed to fetch member {} in guild {}: {:?}",
                message.author.id,
                guild_id,
                e
            );
            Actor::from_message_author(&message.author, None)
        }
    }
}
