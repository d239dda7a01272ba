//! Owner-or-role authorization for privileged guild operations.
//!
//! A user may change a guild's relay configuration if they own the guild or hold at
//! least one of the guild's authorized roles. The authorized role set itself lives in
//! `GuildConfig`; the types here borrow it for the duration of a check or mutation.

use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::{
    error::relay::RelayError,
    model::identity::{Identifiable, RoleBearer},
};

/// Returns whether an actor may perform privileged operations.
///
/// True iff the actor is the owner or any of their roles is authorized. Pure: no side
/// effects and no I/O.
///
/// # Arguments
/// - `actor_id` - Discord user ID of the actor
/// - `actor_role_ids` - Role IDs the actor holds
/// - `owner_id` - Discord user ID of the guild owner
/// - `authorized_roles` - Role IDs authorized for the guild
pub fn is_authorized(
    actor_id: u64,
    actor_role_ids: &[u64],
    owner_id: u64,
    authorized_roles: &HashSet<u64>,
) -> bool {
    actor_id == owner_id
        || actor_role_ids
            .iter()
            .any(|role_id| authorized_roles.contains(role_id))
}

/// Read-only authorization view of one guild: the owner and its authorized roles.
///
/// Built at call time from the guild and its config; never cached.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationContext<'a> {
    pub owner_id: u64,
    pub authorized_roles: &'a HashSet<u64>,
}

impl<'a> AuthorizationContext<'a> {
    pub fn new(owner_id: u64, authorized_roles: &'a HashSet<u64>) -> Self {
        Self {
            owner_id,
            authorized_roles,
        }
    }

    pub fn permits<A: Identifiable + RoleBearer>(&self, actor: &A) -> bool {
        is_authorized(
            actor.id(),
            &actor.role_ids(),
            self.owner_id,
            self.authorized_roles,
        )
    }

    /// Requires the actor to be authorized.
    ///
    /// # Returns
    /// - `Ok(())` - Actor is the owner or holds an authorized role
    /// - `Err(RelayError::Unauthorized)` - Actor fails the owner-or-role check
    pub fn require<A: Identifiable + RoleBearer>(&self, actor: &A) -> Result<(), RelayError> {
        if self.permits(actor) {
            return Ok(());
        }

        tracing::debug!(
            "Denied relay configuration change for user {} (owner {})",
            actor.id(),
            self.owner_id
        );

        Err(RelayError::Unauthorized(actor.id()))
    }
}

/// Mutates a guild's authorized role set on behalf of an authorized actor.
pub struct AuthorizationService<'a> {
    guild_id: u64,
    owner_id: u64,
    authorized_roles: &'a mut HashSet<u64>,
}

impl<'a> AuthorizationService<'a> {
    /// Creates a new AuthorizationService over a guild's authorized role set.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID, used in `RoleNotFound` errors
    /// - `owner_id` - Discord user ID of the guild owner
    /// - `authorized_roles` - The guild's authorized role set to mutate
    pub fn new(guild_id: u64, owner_id: u64, authorized_roles: &'a mut HashSet<u64>) -> Self {
        Self {
            guild_id,
            owner_id,
            authorized_roles,
        }
    }

    pub fn context(&self) -> AuthorizationContext<'_> {
        AuthorizationContext::new(self.owner_id, self.authorized_roles)
    }

    /// Authorizes a role to change the guild's relay configuration.
    ///
    /// Authorization is checked before the role's existence. Adding an already
    /// authorized role is a no-op.
    ///
    /// # Arguments
    /// - `role_id` - Role to authorize
    /// - `actor` - User requesting the change
    /// - `guild_roles` - The guild, used to confirm the role exists
    ///
    /// # Returns
    /// - `Ok(true)` - Role newly authorized
    /// - `Ok(false)` - Role was already authorized
    /// - `Err(RelayError::Unauthorized)` - Actor is not authorized
    /// - `Err(RelayError::RoleNotFound)` - Role does not exist in the guild
    pub fn add_authorized_role<A, G>(
        &mut self,
        role_id: u64,
        actor: &A,
        guild_roles: &G,
    ) -> Result<bool, RelayError>
    where
        A: Identifiable + RoleBearer,
        G: RoleBearer,
    {
        self.context().require(actor)?;

        if !guild_roles.role_ids().contains(&role_id) {
            return Err(RelayError::RoleNotFound {
                guild_id: self.guild_id,
                role_id,
            });
        }

        Ok(self.authorized_roles.insert(role_id))
    }

    /// Revokes a role's authorization.
    ///
    /// Removing a role that is not authorized is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - Role was authorized and has been removed
    /// - `Ok(false)` - Role was not authorized
    /// - `Err(RelayError::Unauthorized)` - Actor is not authorized
    pub fn remove_authorized_role<A>(&mut self, role_id: u64, actor: &A) -> Result<bool, RelayError>
    where
        A: Identifiable + RoleBearer,
    {
        self.context().require(actor)?;

        Ok(self.authorized_roles.remove(&role_id))
    }
}
