use super::*;

/// Tests setting and reading the output channel.
///
/// Expected: get_output_channel returns the channel that was set
#[test]
fn set_then_get_output_channel() -> Result<(), RelayError> {
    let service = RelayConfigService::new();

    service.set_output_channel(GUILD_ID, 789u64)?;

    assert_eq!(service.get_output_channel(GUILD_ID), Some(789));

    Ok(())
}

/// Tests that setting the output channel again overwrites it.
///
/// Expected: the last value wins and watched channels are kept
#[test]
fn output_channel_is_overwritten() -> Result<(), RelayError> {
    let service = seeded_service();

    service.set_output_channel(GUILD_ID, 789u64)?;
    service.set_output_channel(GUILD_ID, 790u64)?;

    assert_eq!(service.get_output_channel(GUILD_ID), Some(790));
    assert_eq!(service.watched_channels(GUILD_ID), vec![456]);

    Ok(())
}

/// Tests reading the output channel when none is configured.
///
/// Expected: None for a guild without output and for an unknown guild
#[test]
fn output_channel_unset_or_unknown() {
    let service = seeded_service();

    assert_eq!(service.get_output_channel(GUILD_ID), None);
    assert_eq!(service.get_output_channel(999), None);
}

/// Tests that output channel ids are validated.
///
/// Expected: Err(InvalidArgument) and no guild entry created
#[test]
fn invalid_output_channel_is_rejected() {
    let service = RelayConfigService::new();

    assert!(matches!(
        service.set_output_channel(GUILD_ID, "general"),
        Err(RelayError::InvalidArgument(_))
    ));
    assert!(matches!(
        service.set_output_channel(GUILD_ID, 0u64),
        Err(RelayError::InvalidArgument(_))
    ));
    assert_eq!(service.guild_config(GUILD_ID), None);
}

/// Tests that unknown guilds report no watched channels.
///
/// Expected: false and an empty listing
#[test]
fn unknown_guild_watches_nothing() {
    let service = RelayConfigService::new();

    assert!(!service.is_channel_watched(GUILD_ID, 456));
    assert!(service.watched_channels(GUILD_ID).is_empty());
}

/// Tests concurrent writers on different guilds and on the same output channel.
///
/// Expected: every guild configured and the shared guild holds one of the writes
#[test]
fn concurrent_writers_do_not_lose_guilds() {
    let service = RelayConfigService::new();

    std::thread::scope(|scope| {
        for guild_id in 1..=8u64 {
            let service = service.clone();
            scope.spawn(move || {
                service
                    .watch_channel(guild_id, 100 + guild_id, &owner(), OWNER_ID)
                    .unwrap();
                service.set_output_channel(GUILD_ID, 200 + guild_id).unwrap();
            });
        }
    });

    for guild_id in 1..=8u64 {
        assert!(service.is_channel_watched(guild_id, 100 + guild_id));
    }
    let output = service.get_output_channel(GUILD_ID).unwrap();
    assert!((201..=208).contains(&output));
}
