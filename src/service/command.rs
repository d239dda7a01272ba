//! Executes relay commands against the relay configuration.
//!
//! Produces the reply text for a successful command. Failures are returned as
//! `RelayError` so the caller can log them before rendering them with
//! `RelayError::into_reply`.

use crate::{
    error::relay::RelayError,
    model::{
        command::RelayCommand,
        identity::{Actor, GuildSnapshot},
    },
    service::relay_config::RelayConfigService,
    util::parse::{parse_id, IdKind},
};

/// The guild, channel and user a command was issued from.
pub struct CommandInvocation<'a> {
    pub guild: &'a GuildSnapshot,
    pub channel_id: u64,
    pub actor: &'a Actor,
}

pub struct CommandService<'a> {
    configs: &'a RelayConfigService,
}

impl<'a> CommandService<'a> {
    pub fn new(configs: &'a RelayConfigService) -> Self {
        Self { configs }
    }

    /// Runs a relay command.
    ///
    /// Channel arguments default to the channel the command was sent in. A channel
    /// named for `watch` or `set-output` must belong to the invoking guild, so one guild
    /// can never watch or post into another. Role commands require an argument; a
    /// missing one fails id validation.
    ///
    /// # Arguments
    /// - `command` - Parsed command with its raw argument
    /// - `invocation` - Where and by whom the command was issued
    ///
    /// # Returns
    /// - `Ok(String)` - Reply text describing the outcome
    /// - `Err(RelayError)` - Validation, authorization or lookup failure
    pub fn execute(
        &self,
        command: &RelayCommand,
        invocation: &CommandInvocation<'_>,
    ) -> Result<String, RelayError> {
        let guild = invocation.guild;
        let actor = invocation.actor;

        match command {
            RelayCommand::Watch(argument) => {
                let channel_id = guild_channel_or_current(argument, invocation)?;
                let added =
                    self.configs
                        .watch_channel(guild.id, channel_id, actor, guild.owner_id)?;

                Ok(if added {
                    format!("Added <#{}> to the watch list.", channel_id)
                } else {
                    format!("<#{}> is already on the watch list.", channel_id)
                })
            }
            RelayCommand::StopWatch(argument) => {
                let channel_id = channel_or_current(argument, invocation.channel_id)?;
                let removed = self.configs.stop_watching_channel(
                    guild.id,
                    channel_id,
                    actor,
                    guild.owner_id,
                )?;

                Ok(if removed {
                    format!("Removed <#{}> from watch list.", channel_id)
                } else {
                    format!("<#{}> was not on the watch list.", channel_id)
                })
            }
            RelayCommand::SetOutput(argument) => {
                let channel_id = guild_channel_or_current(argument, invocation)?;
                self.configs.authorize(guild.id, actor, guild.owner_id)?;
                self.configs.set_output_channel(guild.id, channel_id)?;

                Ok(format!(
                    "Messages from watched channels will be sent to <#{}>.",
                    channel_id
                ))
            }
            RelayCommand::Output => Ok(match self.configs.get_output_channel(guild.id) {
                Some(channel_id) => format!("Watched messages are sent to <#{}>.", channel_id),
                None => "No output channel is set.".to_string(),
            }),
            RelayCommand::Watching => {
                let channels = self.configs.watched_channels(guild.id);

                Ok(if channels.is_empty() {
                    "Not watching any channels.".to_string()
                } else {
                    format!("Watching: {}", mention_list(&channels, "<#", ">"))
                })
            }
            RelayCommand::AddRole(argument) => {
                let role_id = required_role(argument)?;
                let added = self
                    .configs
                    .add_authorized_role(guild.id, role_id, actor, guild)?;

                Ok(if added {
                    format!("<@&{}> can now change relay settings.", role_id)
                } else {
                    format!("<@&{}> can already change relay settings.", role_id)
                })
            }
            RelayCommand::RemoveRole(argument) => {
                let role_id = required_role(argument)?;
                let removed = self.configs.remove_authorized_role(
                    guild.id,
                    role_id,
                    actor,
                    guild.owner_id,
                )?;

                Ok(if removed {
                    format!("<@&{}> can no longer change relay settings.", role_id)
                } else {
                    format!("<@&{}> was not allowed to change relay settings.", role_id)
                })
            }
            RelayCommand::Roles => {
                let roles = self.configs.authorized_roles(guild.id);

                Ok(if roles.is_empty() {
                    "Only the server owner can change relay settings.".to_string()
                } else {
                    format!(
                        "Roles that can change relay settings: {}",
                        mention_list(&roles, "<@&", ">")
                    )
                })
            }
        }
    }
}

fn channel_or_current(argument: &Option<String>, current: u64) -> Result<u64, RelayError> {
    match argument {
        Some(raw) => parse_id(raw, IdKind::Channel),
        None => Ok(current),
    }
}

fn guild_channel_or_current(
    argument: &Option<String>,
    invocation: &CommandInvocation<'_>,
) -> Result<u64, RelayError> {
    let channel_id = channel_or_current(argument, invocation.channel_id)?;

    if channel_id != invocation.channel_id && !invocation.guild.has_channel(channel_id) {
        return Err(RelayError::InvalidArgument(
            "That channel is not in this server.".to_string(),
        ));
    }

    Ok(channel_id)
}

fn required_role(argument: &Option<String>) -> Result<u64, RelayError> {
    parse_id(argument.as_deref().unwrap_or_default(), IdKind::Role)
}

fn mention_list(ids: &[u64], open: &str, close: &str) -> String {
    ids.iter()
        .map(|id| format!("{}{}{}", open, id, close))
        .collect::<Vec<_>>()
        .join(", ")
}
