use super::*;

/// Tests watching a channel in a guild with no entry.
///
/// Verifies that the guild entry is created with the channel as its only watched
/// channel.
///
/// Expected: Ok(true) and a config equal to a fresh one watching 456
#[test]
fn new_guild_new_channel_adds_guild_and_channel() -> Result<(), RelayError> {
    let service = RelayConfigService::new();

    let added = service.watch_channel(GUILD_ID, 456u64, &owner(), OWNER_ID)?;

    let mut expected = GuildConfig::new(GUILD_ID);
    expected.watch(456);
    assert!(added);
    assert_eq!(service.guild_config(GUILD_ID), Some(expected));
    assert!(service.is_channel_watched(GUILD_ID, 456));

    Ok(())
}

/// Tests watching a second channel in an existing guild.
///
/// Expected: both channels watched
#[test]
fn existing_guild_new_channel_adds_channel() -> Result<(), RelayError> {
    let service = seeded_service();

    service.watch_channel(GUILD_ID, 789u64, &owner(), OWNER_ID)?;

    assert_eq!(service.watched_channels(GUILD_ID), vec![456, 789]);

    Ok(())
}

/// Tests that watching an already watched channel does not duplicate it.
///
/// Expected: Ok(false) and a single watched channel
#[test]
fn existing_channel_is_not_duplicated() -> Result<(), RelayError> {
    let service = seeded_service();

    let added = service.watch_channel(GUILD_ID, 456u64, &owner(), OWNER_ID)?;

    assert!(!added);
    assert_eq!(service.watched_channels(GUILD_ID), vec![456]);

    Ok(())
}

/// Tests that string ids are validated as numbers.
///
/// Expected: Err(InvalidArgument) with the guild or channel message
#[test]
fn non_numeric_ids_are_invalid() {
    let service = RelayConfigService::new();

    assert_eq!(
        service.watch_channel("hello", 456u64, &owner(), OWNER_ID),
        Err(RelayError::InvalidArgument(
            "Guild ID must be a number.".to_string()
        ))
    );
    assert_eq!(
        service.watch_channel(GUILD_ID, "world", &owner(), OWNER_ID),
        Err(RelayError::InvalidArgument(
            "Channel ID must be a number.".to_string()
        ))
    );
    assert_eq!(service.guild_config(GUILD_ID), None);
}

/// Tests that numeric string ids are accepted.
///
/// Expected: Ok(true) and the parsed channel watched
#[test]
fn numeric_string_ids_are_accepted() -> Result<(), RelayError> {
    let service = RelayConfigService::new();

    service.watch_channel("123", "<#456>", &owner(), OWNER_ID)?;

    assert!(service.is_channel_watched(GUILD_ID, 456));

    Ok(())
}

/// Tests that validation runs before authorization.
///
/// Expected: Err(InvalidArgument) for an unauthorized actor with a bad id
#[test]
fn validation_precedes_authorization() {
    let service = RelayConfigService::new();

    assert!(matches!(
        service.watch_channel(GUILD_ID, "world", &player(), OWNER_ID),
        Err(RelayError::InvalidArgument(_))
    ));
}

/// Tests that a member with an authorized role may watch channels.
///
/// Expected: Ok(true)
#[test]
fn authorized_role_member_can_watch() -> Result<(), RelayError> {
    let service = seeded_service();

    assert!(service.watch_channel(GUILD_ID, 789u64, &moderator(), OWNER_ID)?);

    Ok(())
}

/// Tests that a non-owner without an authorized role is rejected.
///
/// Verifies the watch set is unchanged for an existing guild and no entry is created
/// for a new one.
///
/// Expected: Err(Unauthorized) with state untouched
#[test]
fn unauthorized_actor_cannot_watch() {
    let service = seeded_service();

    assert_eq!(
        service.watch_channel(GUILD_ID, 789u64, &player(), OWNER_ID),
        Err(RelayError::Unauthorized(34567))
    );
    assert_eq!(service.watched_channels(GUILD_ID), vec![456]);

    assert_eq!(
        service.watch_channel(321u64, 789u64, &moderator(), OWNER_ID),
        Err(RelayError::Unauthorized(23456))
    );
    assert_eq!(service.guild_config(321), None);
}

/// Tests the owner passes regardless of the roles they hold.
///
/// Expected: Ok for the owner with unrelated roles in a guild with no entry
#[test]
fn owner_always_authorized() -> Result<(), RelayError> {
    let service = RelayConfigService::new();
    let owner = Actor::new(OWNER_ID, vec![PLAYER_ROLE]);

    for (guild_id, channel_id) in [(1u64, 2u64), (GUILD_ID, 456), (u64::MAX, u64::MAX)] {
        service.watch_channel(guild_id, channel_id, &owner, OWNER_ID)?;
        assert!(service.is_channel_watched(guild_id, channel_id));
    }

    Ok(())
}

/// Tests concurrent callers watching the same channel in a guild with no entry.
///
/// Expected: exactly one caller reports the channel as newly watched
#[test]
fn concurrent_watches_report_one_addition() {
    let service = RelayConfigService::new();

    let added = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                scope.spawn(move || {
                    service
                        .watch_channel(GUILD_ID, 456u64, &owner(), OWNER_ID)
                        .unwrap()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|added| *added)
            .count()
    });

    assert_eq!(added, 1);
    assert_eq!(service.watched_channels(GUILD_ID), vec![456]);
}
