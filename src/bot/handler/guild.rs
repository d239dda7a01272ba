//! Guild lifecycle event handlers.
//!
//! Relay configs are kept for the lifetime of the process, so joining or leaving a
//! guild only logs. A guild that comes back keeps its watched channels.

use dioxus_logger::tracing;
use serenity::all::{Context, Guild, UnavailableGuild};

/// Handles the guild_create event when a guild becomes available or the bot joins it.
///
/// # Arguments
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `guild` - The guild from Discord
/// - `is_new` - `Some(true)` when the bot just joined the guild
pub async fn handle_guild_create(_ctx: Context, guild: Guild, is_new: Option<bool>) {
    if is_new == Some(true) {
        tracing::info!("Joined guild {} ({})", guild.name, guild.id);
    } else {
        tracing::debug!("Guild {} ({}) is available", guild.name, guild.id);
    }
}

/// Handles the guild_delete event when the bot leaves a guild or it goes offline.
///
/// # Arguments
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `incomplete` - Guild id and whether it is merely unavailable
/// - `full` - Cached guild data if available
pub async fn handle_guild_delete(_ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
    let name = full
        .as_ref()
        .map(|guild| guild.name.as_str())
        .unwrap_or("unknown");

    if incomplete.unavailable {
        tracing::warn!("Guild {} ({}) became unavailable", name, incomplete.id);
    } else {
        tracing::info!("Left guild {} ({})", name, incomplete.id);
    }
}
