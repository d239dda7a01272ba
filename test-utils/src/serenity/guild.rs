//! Test factory for creating Serenity Guild objects.

use serenity::all::Guild;

use super::role::test_role_json;

/// Creates a test Serenity Guild with an owner, a set of roles and text channels.
///
/// Roles are given as `(role_id, name)` pairs and positioned in the order given.
/// Channels are plain text channels named after their id. All other fields are set to
/// reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `owner_id` - Discord user ID of the guild owner
/// - `roles` - Roles defined in the guild
/// - `channels` - IDs of the text channels in the guild
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::create_test_guild;
///
/// let guild = create_test_guild(123456789, "Test Guild", 12345, &[(111, "Mods")], &[456]);
/// assert_eq!(guild.roles.len(), 1);
/// assert_eq!(guild.channels.len(), 1);
/// ```
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    owner_id: u64,
    roles: &[(u64, &str)],
    channels: &[u64],
) -> Guild {
    let roles: Vec<_> = roles
        .iter()
        .enumerate()
        .map(|(position, (role_id, role_name))| {
            test_role_json(*role_id, role_name, 0, position as i16)
        })
        .collect();

    let channels: Vec<_> = channels
        .iter()
        .enumerate()
        .map(|(position, channel_id)| {
            serde_json::json!({
                "id": channel_id.to_string(),
                "type": 0,
                "guild_id": guild_id.to_string(),
                "name": format!("channel-{}", channel_id),
                "position": position,
                "permission_overwrites": [],
                "topic": null,
                "nsfw": false,
                "parent_id": null,
                "last_message_id": null,
                "rate_limit_per_user": 0,
                "flags": 0,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": owner_id.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": channels,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
