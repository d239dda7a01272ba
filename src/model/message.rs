//! Incoming message model and the relay decision it produces.

use serenity::all::Message;

/// The fields of a Discord message the relay inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Discord user ID of the author.
    pub author_id: u64,
    /// Display name used when the message is forwarded.
    pub author_name: String,
    /// Guild the message was sent in, `None` for direct messages.
    pub guild_id: Option<u64>,
    /// Channel the message was sent in.
    pub channel_id: u64,
    /// Message text.
    pub content: String,
}

impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_id: message.author.id.get(),
            author_name: message.author.display_name().to_string(),
            guild_id: message.guild_id.map(|id| id.get()),
            channel_id: message.channel_id.get(),
            content: message.content.clone(),
        }
    }
}

/// What to do with an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayAction {
    /// Leave the message alone.
    Ignore,
    /// Send the content to the guild's output channel.
    Forward {
        content: String,
        target_channel_id: u64,
    },
}
