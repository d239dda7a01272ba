use super::*;

/// Tests removing a watched channel.
///
/// Expected: Ok(true) and an empty watch set with the guild entry kept
#[test]
fn removes_watched_channel() -> Result<(), RelayError> {
    let service = seeded_service();

    let removed = service.stop_watching_channel(GUILD_ID, 456u64, &owner(), OWNER_ID)?;

    assert!(removed);
    assert!(!service.is_channel_watched(GUILD_ID, 456));
    assert!(service.guild_config(GUILD_ID).is_some());

    Ok(())
}

/// Tests removing a channel that was never watched.
///
/// Expected: Ok(false) and the watch set unchanged
#[test]
fn unwatched_channel_is_noop() -> Result<(), RelayError> {
    let service = seeded_service();

    let removed = service.stop_watching_channel(GUILD_ID, 789u64, &owner(), OWNER_ID)?;

    assert!(!removed);
    assert_eq!(service.watched_channels(GUILD_ID), vec![456]);

    Ok(())
}

/// Tests stopping a watch in a guild with no entry.
///
/// Expected: Err(GuildNotFound) with the original message
#[test]
fn missing_guild_is_not_found() {
    let service = seeded_service();

    let result = service.stop_watching_channel(456u64, 456u64, &owner(), OWNER_ID);

    assert_eq!(result, Err(RelayError::GuildNotFound(456)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "No Guild with ID '456' found."
    );
}

/// Tests that authorization is checked before guild existence.
///
/// Expected: Err(Unauthorized) for an unauthorized actor in a guild with no entry
#[test]
fn authorization_precedes_existence() {
    let service = RelayConfigService::new();

    assert_eq!(
        service.stop_watching_channel(GUILD_ID, 456u64, &player(), OWNER_ID),
        Err(RelayError::Unauthorized(34567))
    );
}

/// Tests that validation runs before authorization.
///
/// Expected: Err(InvalidArgument) for an unauthorized actor with a bad id
#[test]
fn validation_precedes_authorization() {
    let service = seeded_service();

    assert_eq!(
        service.stop_watching_channel(GUILD_ID, "world", &player(), OWNER_ID),
        Err(RelayError::InvalidArgument(
            "Channel ID must be a number.".to_string()
        ))
    );
    assert_eq!(
        service.stop_watching_channel("hello", 456u64, &player(), OWNER_ID),
        Err(RelayError::InvalidArgument(
            "Guild ID must be a number.".to_string()
        ))
    );
    assert!(service.is_channel_watched(GUILD_ID, 456));
}

/// Tests that an unauthorized actor cannot remove a channel.
///
/// Expected: Err(Unauthorized) and the channel still watched
#[test]
fn unauthorized_actor_cannot_stop_watching() {
    let service = seeded_service();

    assert_eq!(
        service.stop_watching_channel(GUILD_ID, 456u64, &player(), OWNER_ID),
        Err(RelayError::Unauthorized(34567))
    );
    assert!(service.is_channel_watched(GUILD_ID, 456));
}

/// Tests that string ids are validated as numbers.
///
/// Expected: Err(InvalidArgument) with the guild or channel message
#[test]
fn non_numeric_ids_are_invalid() {
    let service = RelayConfigService::new();

    assert_eq!(
        service.stop_watching_channel("hello", 456u64, &owner(), OWNER_ID),
        Err(RelayError::InvalidArgument(
            "Guild ID must be a number.".to_string()
        ))
    );
    assert_eq!(
        service.stop_watching_channel(GUILD_ID, "world", &owner(), OWNER_ID),
        Err(RelayError::InvalidArgument(
            "Channel ID must be a number.".to_string()
        ))
    );
}
