//! Role event handlers.
//!
//! A deleted role is removed from its guild's authorized roles so a role recreated
//! later does not inherit relay permissions.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Role, RoleId};

use crate::service::relay_config::RelayConfigService;

/// Handles the guild_role_delete event when a role is deleted from a guild.
///
/// # Arguments
/// - `relay_config` - Relay configuration store
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `guild_id` - ID of the guild the role was deleted from
/// - `removed_role_id` - ID of the deleted role
/// - `_removed_role_data_if_in_cache` - Role data if it was in cache (unused)
pub async fn handle_guild_role_delete(
    relay_config: &RelayConfigService,
    _ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    _removed_role_data_if_in_cache: Option<Role>,
) {
    if relay_config.forget_role(guild_id.get(), removed_role_id.get()) {
        tracing::info!(
            "Revoked relay authorization of deleted role {} in guild {}",
            removed_role_id,
            guild_id
        );
    }
}
