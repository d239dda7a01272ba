use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// A guild, channel or role id could not be read as a Discord id.
    ///
    /// Carries the message shown to the user so they can retry the command with a
    /// valid value.
    #[error("{0}")]
    InvalidArgument(String),

    /// The actor is neither the guild owner nor holds an authorized role.
    ///
    /// # Fields
    /// - Discord user ID of the rejected actor
    #[error("User {0} is not authorized to change the relay configuration")]
    Unauthorized(u64),

    /// The guild has no relay configuration yet.
    ///
    /// # Fields
    /// - Discord guild ID that was looked up
    #[error("No Guild with ID '{0}' found.")]
    GuildNotFound(u64),

    /// The role to authorize does not exist in the guild.
    #[error("The guild '{guild_id}' does not have the role '{role_id}'.")]
    RoleNotFound {
        /// Discord guild ID the role was looked up in
        guild_id: u64,
        /// Discord role ID that was not found
        role_id: u64,
    },
}

impl RelayError {
    /// Converts the error into the reply sent back to the invoking channel.
    ///
    /// Argument errors are shown verbatim since they tell the user what to fix. The other
    /// variants map to fixed messages that do not echo raw ids back into the channel.
    ///
    /// # Returns
    /// - `String` - User-facing reply text
    pub fn into_reply(self) -> String {
        match self {
            Self::InvalidArgument(message) => message,
            Self::Unauthorized(_) => {
                "You are not allowed to change the relay settings for this server.".to_string()
            }
            Self::GuildNotFound(_) => {
                "Did not have this guild registered to watch anything.".to_string()
            }
            Self::RoleNotFound { .. } => "This server does not have that role.".to_string(),
        }
    }
}
