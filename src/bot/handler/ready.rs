//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the bot user and the guilds it is in. Guilds in the ready payload are
/// unavailable stubs, so only their ids are known at this point; names arrive with the
/// following `guild_create` events.
///
/// # Arguments
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user and guild information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    for guild in &ready.guilds {
        tracing::info!("{} is on guild {}", ready.user.name, guild.id);
    }
}
