//! Test JSON for Serenity Role objects.

use serde_json::Value;

/// Builds the JSON Discord sends for a role.
///
/// Used by the guild factory so roles embedded in a guild deserialize the way they do
/// in a real `GUILD_CREATE`. Roles are not hoisted, not managed, not mentionable and
/// carry zero permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
pub fn test_role_json(role_id: u64, name: &str, color: u32, position: i16) -> Value {
    serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    })
}
