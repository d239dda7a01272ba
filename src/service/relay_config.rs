//! Guild relay configuration store and its guarded mutations.
//!
//! `RelayConfigService` owns the mapping of guild id to `GuildConfig`. It is created once at
//! start-up and handed to the bot's event handler; clones share the same mapping.
//!
//! Every guarded operation runs its checks in the same order: ids are validated first,
//! then the actor is authorized, then the guild's existence is checked. An unauthorized
//! actor therefore gets `Unauthorized` even for a guild with no entry.
//!
//! The mapping is a `DashMap`, so operations on different guilds lock different shards
//! and may run in parallel. Each guarded operation authorizes and mutates under a single
//! entry guard, and a map guard is never held while the same map is accessed again.

use dashmap::{mapref::entry::Entry, DashMap};
use dioxus_logger::tracing;
use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    error::relay::RelayError,
    model::{
        guild_config::GuildConfig,
        identity::{Identifiable, Owned, RoleBearer},
    },
    service::authorization::{AuthorizationContext, AuthorizationService},
    util::parse::{IdArgument, IdKind},
};

#[derive(Clone, Default)]
pub struct RelayConfigService {
    guild_configs: Arc<DashMap<u64, GuildConfig>>,
}

impl RelayConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the owner-or-role check against a guild's authorized roles.
    ///
    /// A guild without an entry has no authorized roles, so only its owner passes.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `actor` - User requesting a privileged operation
    /// - `owner_id` - Discord user ID of the guild owner
    ///
    /// # Returns
    /// - `Ok(())` - Actor is authorized
    /// - `Err(RelayError::Unauthorized)` - Actor is neither owner nor holds an authorized role
    pub fn authorize<A>(&self, guild_id: u64, actor: &A, owner_id: u64) -> Result<(), RelayError>
    where
        A: Identifiable + RoleBearer,
    {
        match self.guild_configs.get(&guild_id) {
            Some(config) => {
                AuthorizationContext::new(owner_id, &config.authorized_roles).require(actor)
            }
            None => AuthorizationContext::new(owner_id, &HashSet::new()).require(actor),
        }
    }

    /// Adds a channel to the guild's watch set, creating the guild entry if needed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Channel to relay messages from
    /// - `actor` - User requesting the change
    /// - `owner_id` - Discord user ID of the guild owner
    ///
    /// # Returns
    /// - `Ok(true)` - Channel newly watched
    /// - `Ok(false)` - Channel was already watched
    /// - `Err(RelayError::InvalidArgument)` - Either id is not a valid Discord id
    /// - `Err(RelayError::Unauthorized)` - Actor is not authorized; nothing is created
    pub fn watch_channel<A>(
        &self,
        guild_id: impl IdArgument,
        channel_id: impl IdArgument,
        actor: &A,
        owner_id: u64,
    ) -> Result<bool, RelayError>
    where
        A: Identifiable + RoleBearer,
    {
        let guild_id = guild_id.to_id(IdKind::Guild)?;
        let channel_id = channel_id.to_id(IdKind::Channel)?;

        let added = match self.guild_configs.entry(guild_id) {
            Entry::Occupied(mut entry) => {
                AuthorizationContext::new(owner_id, &entry.get().authorized_roles).require(actor)?;
                entry.get_mut().watch(channel_id)
            }
            Entry::Vacant(entry) => {
                AuthorizationContext::new(owner_id, &HashSet::new()).require(actor)?;
                let mut config = GuildConfig::new(guild_id);
                let added = config.watch(channel_id);
                entry.insert(config);
                added
            }
        };

        if added {
            tracing::info!("Watching channel {} in guild {}", channel_id, guild_id);
        }

        Ok(added)
    }

    /// Removes a channel from the guild's watch set.
    ///
    /// # Returns
    /// - `Ok(true)` - Channel was watched and has been removed
    /// - `Ok(false)` - Channel was not watched
    /// - `Err(RelayError::InvalidArgument)` - Either id is not a valid Discord id
    /// - `Err(RelayError::Unauthorized)` - Actor is not authorized
    /// - `Err(RelayError::GuildNotFound)` - Guild has no relay configuration
    pub fn stop_watching_channel<A>(
        &self,
        guild_id: impl IdArgument,
        channel_id: impl IdArgument,
        actor: &A,
        owner_id: u64,
    ) -> Result<bool, RelayError>
    where
        A: Identifiable + RoleBearer,
    {
        let guild_id = guild_id.to_id(IdKind::Guild)?;
        let channel_id = channel_id.to_id(IdKind::Channel)?;

        let Some(mut config) = self.guild_configs.get_mut(&guild_id) else {
            AuthorizationContext::new(owner_id, &HashSet::new()).require(actor)?;
            return Err(RelayError::GuildNotFound(guild_id));
        };

        AuthorizationContext::new(owner_id, &config.authorized_roles).require(actor)?;

        let removed = config.unwatch(channel_id);

        if removed {
            tracing::info!(
                "Stopped watching channel {} in guild {}",
                channel_id,
                guild_id
            );
        }

        Ok(removed)
    }

    /// Sets the guild's output channel, replacing any previous one.
    ///
    /// Creates the guild entry if it does not exist. Concurrent calls resolve to the
    /// last writer.
    ///
    /// # Returns
    /// - `Ok(())` - Output channel set
    /// - `Err(RelayError::InvalidArgument)` - Either id is not a valid Discord id
    pub fn set_output_channel(
        &self,
        guild_id: impl IdArgument,
        channel_id: impl IdArgument,
    ) -> Result<(), RelayError> {
        let guild_id = guild_id.to_id(IdKind::Guild)?;
        let channel_id = channel_id.to_id(IdKind::Channel)?;

        self.guild_configs
            .entry(guild_id)
            .or_insert_with(|| GuildConfig::new(guild_id))
            .set_output(channel_id);

        tracing::info!("Set output channel {} for guild {}", channel_id, guild_id);

        Ok(())
    }

    /// Returns the guild's output channel, `None` if unset or the guild is unknown.
    pub fn get_output_channel(&self, guild_id: u64) -> Option<u64> {
        self.guild_configs
            .get(&guild_id)
            .and_then(|config| config.output_channel_id)
    }

    /// Returns whether the channel is watched, `false` if the guild is unknown.
    pub fn is_channel_watched(&self, guild_id: u64, channel_id: u64) -> bool {
        self.guild_configs
            .get(&guild_id)
            .is_some_and(|config| config.is_watched(channel_id))
    }

    /// Returns the guild's watched channels in ascending order.
    pub fn watched_channels(&self, guild_id: u64) -> Vec<u64> {
        sorted(self.guild_configs.get(&guild_id).map(|config| {
            config.watched_channels.iter().copied().collect::<Vec<_>>()
        }))
    }

    /// Returns the guild's authorized roles in ascending order.
    pub fn authorized_roles(&self, guild_id: u64) -> Vec<u64> {
        sorted(self.guild_configs.get(&guild_id).map(|config| {
            config.authorized_roles.iter().copied().collect::<Vec<_>>()
        }))
    }

    /// Authorizes a role for the guild.
    ///
    /// The role must exist in `guild`. An unauthorized request never creates a guild entry.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `role_id` - Role to authorize
    /// - `actor` - User requesting the change
    /// - `guild` - The guild, providing its owner and role list
    ///
    /// # Returns
    /// - `Ok(true)` - Role newly authorized
    /// - `Ok(false)` - Role was already authorized
    /// - `Err(RelayError::InvalidArgument)` - Either id is not a valid Discord id
    /// - `Err(RelayError::Unauthorized)` - Actor is not authorized
    /// - `Err(RelayError::RoleNotFound)` - Role does not exist in the guild
    pub fn add_authorized_role<A, G>(
        &self,
        guild_id: impl IdArgument,
        role_id: impl IdArgument,
        actor: &A,
        guild: &G,
    ) -> Result<bool, RelayError>
    where
        A: Identifiable + RoleBearer,
        G: Owned + RoleBearer,
    {
        let guild_id = guild_id.to_id(IdKind::Guild)?;
        let role_id = role_id.to_id(IdKind::Role)?;

        let added = match self.guild_configs.entry(guild_id) {
            Entry::Occupied(mut entry) => AuthorizationService::new(
                guild_id,
                guild.owner_id(),
                &mut entry.get_mut().authorized_roles,
            )
            .add_authorized_role(role_id, actor, guild)?,
            Entry::Vacant(entry) => {
                let mut config = GuildConfig::new(guild_id);
                let added = AuthorizationService::new(
                    guild_id,
                    guild.owner_id(),
                    &mut config.authorized_roles,
                )
                .add_authorized_role(role_id, actor, guild)?;

                entry.insert(config);
                added
            }
        };

        if added {
            tracing::info!("Authorized role {} in guild {}", role_id, guild_id);
        }

        Ok(added)
    }

    /// Revokes a role's authorization for the guild.
    ///
    /// Revoking a role that is not authorized, including in a guild with no entry, is a
    /// no-op for an authorized actor.
    ///
    /// # Returns
    /// - `Ok(true)` - Role was authorized and has been removed
    /// - `Ok(false)` - Role was not authorized
    /// - `Err(RelayError::InvalidArgument)` - Either id is not a valid Discord id
    /// - `Err(RelayError::Unauthorized)` - Actor is not authorized
    pub fn remove_authorized_role<A>(
        &self,
        guild_id: impl IdArgument,
        role_id: impl IdArgument,
        actor: &A,
        owner_id: u64,
    ) -> Result<bool, RelayError>
    where
        A: Identifiable + RoleBearer,
    {
        let guild_id = guild_id.to_id(IdKind::Guild)?;
        let role_id = role_id.to_id(IdKind::Role)?;

        let Some(mut config) = self.guild_configs.get_mut(&guild_id) else {
            AuthorizationContext::new(owner_id, &HashSet::new()).require(actor)?;
            return Ok(false);
        };

        let removed = AuthorizationService::new(guild_id, owner_id, &mut config.authorized_roles)
            .remove_authorized_role(role_id, actor)?;

        if removed {
            tracing::info!("Revoked role {} in guild {}", role_id, guild_id);
        }

        Ok(removed)
    }

    /// Drops a deleted channel from the guild's watch set and output channel.
    ///
    /// # Returns
    /// - `true` - The guild's config referenced the channel
    /// - `false` - Nothing referenced the channel
    pub fn forget_channel(&self, guild_id: u64, channel_id: u64) -> bool {
        self.guild_configs
            .get_mut(&guild_id)
            .is_some_and(|mut config| config.forget_channel(channel_id))
    }

    /// Drops a deleted role from the guild's authorized roles.
    ///
    /// # Returns
    /// - `true` - The role was authorized
    /// - `false` - The role was not authorized or the guild is unknown
    pub fn forget_role(&self, guild_id: u64, role_id: u64) -> bool {
        self.guild_configs
            .get_mut(&guild_id)
            .is_some_and(|mut config| config.authorized_roles.remove(&role_id))
    }

    #[cfg(test)]
    pub(crate) fn guild_config(&self, guild_id: u64) -> Option<GuildConfig> {
        self.guild_configs
            .get(&guild_id)
            .map(|config| config.value().clone())
    }

    #[cfg(test)]
    pub(crate) fn insert_guild_config(&self, config: GuildConfig) {
        self.guild_configs.insert(config.guild_id, config);
    }
}

fn sorted(ids: Option<Vec<u64>>) -> Vec<u64> {
    let mut ids = ids.unwrap_or_default();
    ids.sort_unstable();
    ids
}
