//! Per-guild relay configuration.

use std::collections::HashSet;

/// Relay state for a single guild.
///
/// Created on first reference to a guild and kept for the lifetime of the process.
/// Sets guarantee that watched channels and authorized roles never hold duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildConfig {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Channels whose messages are relayed.
    pub watched_channels: HashSet<u64>,
    /// The single destination channel for relayed messages.
    pub output_channel_id: Option<u64>,
    /// Roles whose members may change this guild's relay configuration.
    pub authorized_roles: HashSet<u64>,
}

impl GuildConfig {
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            ..Default::default()
        }
    }

    /// Adds a channel to the watch set.
    ///
    /// # Returns
    /// - `true` - The channel was not watched before
    /// - `false` - The channel was already watched
    pub fn watch(&mut self, channel_id: u64) -> bool {
        self.watched_channels.insert(channel_id)
    }

    /// Removes a channel from the watch set.
    ///
    /// # Returns
    /// - `true` - The channel was watched and has been removed
    /// - `false` - The channel was not watched
    pub fn unwatch(&mut self, channel_id: u64) -> bool {
        self.watched_channels.remove(&channel_id)
    }

    pub fn is_watched(&self, channel_id: u64) -> bool {
        self.watched_channels.contains(&channel_id)
    }

    /// Replaces the output channel.
    pub fn set_output(&mut self, channel_id: u64) {
        self.output_channel_id = Some(channel_id);
    }

    /// Drops every reference to a channel that no longer exists.
    ///
    /// # Returns
    /// - `true` - The channel was watched or was the output channel
    /// - `false` - The config did not reference the channel
    pub fn forget_channel(&mut self, channel_id: u64) -> bool {
        let was_watched = self.unwatch(channel_id);
        let was_output = self.output_channel_id == Some(channel_id);

        if was_output {
            self.output_channel_id = None;
        }

        was_watched || was_output
    }
}
