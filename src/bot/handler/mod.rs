use serenity::all::{
    ChannelId, Context, CreateAllowedMentions, CreateMessage, EventHandler, Guild, GuildChannel,
    GuildId, Message, Ready, Role, RoleId, UnavailableGuild,
};
use serenity::async_trait;

use crate::service::relay_config::RelayConfigService;

pub mod channel;
pub mod guild;
pub mod message;
pub mod ready;
pub mod role;

/// Discord bot event handler
pub struct Handler {
    pub relay_config: RelayConfigService,
    pub command_prefix: String,
}

impl Handler {
    pub fn new(relay_config: RelayConfigService, command_prefix: String) -> Self {
        Self {
            relay_config,
            command_prefix,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(ctx, guild, is_new).await;
    }

    /// Called when the bot leaves a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(ctx, incomplete, full).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.relay_config, ctx, channel, messages).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            &self.relay_config,
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.relay_config, &self.command_prefix, ctx, message).await;
    }
}

/// Sends text to a channel with every mention disabled.
///
/// Relayed and reply text may contain user, role or everyone mentions copied from
/// other channels; none of them should ping.
pub(crate) async fn send_quiet(
    ctx: &Context,
    channel_id: ChannelId,
    content: String,
) -> Result<(), serenity::Error> {
    let message = CreateMessage::new()
        .content(content)
        .allowed_mentions(CreateAllowedMentions::new());

    channel_id.send_message(&ctx.http, message).await?;

    Ok(())
}
