use super::*;

/// Tests that the owner can authorize a guild role.
///
/// Expected: Ok(true) and the role is listed
#[test]
fn owner_adds_role() -> Result<(), RelayError> {
    let service = RelayConfigService::new();

    assert!(service.add_authorized_role(GUILD_ID, PLAYER_ROLE, &owner(), &guild())?);
    assert_eq!(service.authorized_roles(GUILD_ID), vec![PLAYER_ROLE]);

    Ok(())
}

/// Tests that a newly authorized role grants access to its members.
///
/// Expected: player passes authorization after their role is added
#[test]
fn added_role_grants_access() -> Result<(), RelayError> {
    let service = seeded_service();
    assert!(service.authorize(GUILD_ID, &player(), OWNER_ID).is_err());

    service.add_authorized_role(GUILD_ID, PLAYER_ROLE, &moderator(), &guild())?;

    service.authorize(GUILD_ID, &player(), OWNER_ID)?;
    service.watch_channel(GUILD_ID, 789u64, &player(), OWNER_ID)?;

    Ok(())
}

/// Tests that a role missing from the guild is rejected.
///
/// Expected: Err(RoleNotFound) and the authorized roles unchanged
#[test]
fn role_not_in_guild_is_rejected() {
    let service = seeded_service();

    assert_eq!(
        service.add_authorized_role(GUILD_ID, 333u64, &owner(), &guild()),
        Err(RelayError::RoleNotFound {
            guild_id: GUILD_ID,
            role_id: 333,
        })
    );
    assert_eq!(service.authorized_roles(GUILD_ID), vec![MOD_ROLE]);
}

/// Tests that an unauthorized request never creates a guild entry.
///
/// Expected: Err(Unauthorized) and no config for the guild
#[test]
fn unauthorized_add_creates_nothing() {
    let service = RelayConfigService::new();

    assert_eq!(
        service.add_authorized_role(GUILD_ID, PLAYER_ROLE, &player(), &guild()),
        Err(RelayError::Unauthorized(34567))
    );
    assert_eq!(service.guild_config(GUILD_ID), None);
}

/// Tests revoking a role.
///
/// Expected: Ok(true), then the former role member is rejected
#[test]
fn removed_role_revokes_access() -> Result<(), RelayError> {
    let service = seeded_service();

    assert!(service.remove_authorized_role(GUILD_ID, MOD_ROLE, &owner(), OWNER_ID)?);

    assert_eq!(
        service.authorize(GUILD_ID, &moderator(), OWNER_ID),
        Err(RelayError::Unauthorized(23456))
    );
    assert_eq!(
        service.guild_config(GUILD_ID).map(|config| config.authorized_roles),
        Some(HashSet::new())
    );

    Ok(())
}

/// Tests revoking roles that are not authorized.
///
/// Expected: Ok(false) in a known guild and in a guild with no entry
#[test]
fn removing_absent_role_is_noop() -> Result<(), RelayError> {
    let service = seeded_service();

    assert!(!service.remove_authorized_role(GUILD_ID, PLAYER_ROLE, &moderator(), OWNER_ID)?);
    assert!(!service.remove_authorized_role(321u64, PLAYER_ROLE, &owner(), OWNER_ID)?);
    assert_eq!(service.authorized_roles(GUILD_ID), vec![MOD_ROLE]);
    assert_eq!(service.guild_config(321), None);

    Ok(())
}

/// Tests that an unauthorized actor cannot revoke roles.
///
/// Expected: Err(Unauthorized) in both a known and an unknown guild
#[test]
fn unauthorized_remove_is_rejected() {
    let service = seeded_service();

    assert_eq!(
        service.remove_authorized_role(GUILD_ID, MOD_ROLE, &player(), OWNER_ID),
        Err(RelayError::Unauthorized(34567))
    );
    assert_eq!(
        service.remove_authorized_role(321u64, MOD_ROLE, &player(), OWNER_ID),
        Err(RelayError::Unauthorized(34567))
    );
    assert_eq!(service.authorized_roles(GUILD_ID), vec![MOD_ROLE]);
}

/// Tests concurrent callers authorizing the same role in a guild with no entry.
///
/// Expected: exactly one caller reports the role as newly added
#[test]
fn concurrent_adds_report_one_addition() {
    let service = RelayConfigService::new();
    let guild = guild();

    let added = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                let guild = &guild;
                scope.spawn(move || {
                    service
                        .add_authorized_role(GUILD_ID, MOD_ROLE, &owner(), guild)
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
    assert_eq!(service.authorized_roles(GUILD_ID), vec![MOD_ROLE]);
}
