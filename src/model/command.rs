//! Prefix commands understood by the relay.
//!
//! Commands take the form `<prefix><name> [argument]`, for example `!watch <#123>`.
//! Command names are case-insensitive. Anything that does not match a relay command is
//! left for other bot features, so parsing returns `None` instead of an error.

/// A parsed relay command with its raw, unvalidated argument.
///
/// Argument validation happens in the command service so that bad ids surface as
/// `RelayError::InvalidArgument` in the same order as every other relay operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayCommand {
    /// Watch the given channel, or the current one.
    Watch(Option<String>),
    /// Stop watching the given channel, or the current one.
    StopWatch(Option<String>),
    /// Make the given channel, or the current one, the output channel.
    SetOutput(Option<String>),
    /// Report the output channel.
    Output,
    /// List watched channels.
    Watching,
    /// Authorize a role to change relay settings.
    AddRole(Option<String>),
    /// Revoke a role's authorization.
    RemoveRole(Option<String>),
    /// List authorized roles.
    Roles,
}

impl RelayCommand {
    /// Parses a message into a relay command.
    ///
    /// # Arguments
    /// - `prefix` - Command prefix configured for the bot
    /// - `content` - Full message text
    ///
    /// # Returns
    /// - `Some(RelayCommand)` - The message is a relay command
    /// - `None` - The message is not prefixed or names another command
    pub fn parse(prefix: &str, content: &str) -> Option<Self> {
        let body = content.trim_start().strip_prefix(prefix)?;
        let mut parts = body.split_whitespace();
        let name = parts.next()?.to_lowercase();
        let argument = parts.next().map(str::to_string);

        let command = match name.as_str() {
            "watch" => Self::Watch(argument),
            "stop-watch" | "unwatch" => Self::StopWatch(argument),
            "set-output" => Self::SetOutput(argument),
            "output" => Self::Output,
            "watching" => Self::Watching,
            "add-role" => Self::AddRole(argument),
            "remove-role" => Self::RemoveRole(argument),
            "roles" => Self::Roles,
            _ => return None,
        };

        Some(command)
    }

    /// Name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Watch(_) => "watch",
            Self::StopWatch(_) => "stop-watch",
            Self::SetOutput(_) => "set-output",
            Self::Output => "output",
            Self::Watching => "watching",
            Self::AddRole(_) => "add-role",
            Self::RemoveRole(_) => "remove-role",
            Self::Roles => "roles",
        }
    }
}
