//! Channel event handlers.
//!
//! A deleted channel can no longer be watched or receive relayed messages, so it is
//! dropped from its guild's relay config.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildChannel, Message};

use crate::service::relay_config::RelayConfigService;

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// # Arguments
/// - `relay_config` - Relay configuration store
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel` - The deleted guild channel
/// - `_messages` - Cached messages from the channel (unused)
pub async fn handle_channel_delete(
    relay_config: &RelayConfigService,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let guild_id = channel.guild_id.get();

    if relay_config.forget_channel(guild_id, channel.id.get()) {
        tracing::info!(
            "Removed deleted channel {} from relay config of guild {}",
            channel.name,
            guild_id
        );
    }
}
