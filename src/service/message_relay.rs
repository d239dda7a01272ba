//! Forwarding decision for messages posted in watched channels.

use dioxus_logger::tracing;
use serenity::constants::MESSAGE_CODE_LIMIT;

use crate::{
    model::message::{IncomingMessage, RelayAction},
    service::relay_config::RelayConfigService,
};

pub struct MessageRelay<'a> {
    configs: &'a RelayConfigService,
    bot_id: u64,
}

impl<'a> MessageRelay<'a> {
    /// Creates a new MessageRelay instance.
    ///
    /// # Arguments
    /// - `configs` - Relay configuration to consult
    /// - `bot_id` - Discord user ID of the bot, whose own messages are never forwarded
    pub fn new(configs: &'a RelayConfigService, bot_id: u64) -> Self {
        Self { configs, bot_id }
    }

    /// Decides whether a message is forwarded and to which channel.
    ///
    /// Never mutates relay state. Messages are ignored when they come from the bot
    /// itself, were sent outside a guild, have no text, were posted in a channel that is
    /// not watched, or when the guild has no output channel.
    ///
    /// # Arguments
    /// - `message` - The incoming message
    ///
    /// # Returns
    /// - `RelayAction::Forward` - Content and the output channel to send it to
    /// - `RelayAction::Ignore` - Nothing to do
    pub fn handle_incoming(&self, message: &IncomingMessage) -> RelayAction {
        if message.author_id == self.bot_id {
            return RelayAction::Ignore;
        }

        let Some(guild_id) = message.guild_id else {
            return RelayAction::Ignore;
        };

        if message.content.trim().is_empty() {
            return RelayAction::Ignore;
        }

        if !self.configs.is_channel_watched(guild_id, message.channel_id) {
            return RelayAction::Ignore;
        }

        let Some(target_channel_id) = self.configs.get_output_channel(guild_id) else {
            tracing::debug!(
                "Channel {} in guild {} is watched but no output channel is set",
                message.channel_id,
                guild_id
            );
            return RelayAction::Ignore;
        };

        RelayAction::Forward {
            content: message.content.clone(),
            target_channel_id,
        }
    }
}

const TRUNCATION_MARKER: char = '…';

/// Formats forwarded content with its author and source channel.
///
/// The result never exceeds Discord's message length, counted in characters. Content
/// that does not fit after the prefix is cut and ends with `…`. If the prefix alone
/// would not fit, it is dropped and only the content is sent.
pub fn render_forward(author_name: &str, source_channel_id: u64, content: &str) -> String {
    let prefix = format!("**{}** in <#{}>: ", author_name, source_channel_id);
    let prefix_len = prefix.chars().count();

    if prefix_len >= MESSAGE_CODE_LIMIT {
        return truncate_chars(content, MESSAGE_CODE_LIMIT);
    }

    prefix + &truncate_chars(content, MESSAGE_CODE_LIMIT - prefix_len)
}

/// Cuts `text` to at most `max_chars` characters, the last being the marker if cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    kept + &TRUNCATION_MARKER.to_string()
}
