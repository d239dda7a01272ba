//! Capability traits for the chat-platform objects the relay consumes.
//!
//! The relay core only needs three things from Discord objects: an id, the role ids an
//! object carries, and a guild's owner. These traits capture exactly that so services can
//! accept serenity models and the bot's own snapshots interchangeably.
//!
//! Serenity implementations are provided for `Member`, `Guild` and `PartialGuild`.
//! `Actor` and `GuildSnapshot` are owned copies built in the message handler so no cache
//! guard is held across an await point.

use serenity::all::{Guild, Member, PartialGuild, PartialMember, User};

/// An object with a Discord snowflake id.
pub trait Identifiable {
    fn id(&self) -> u64;
}

/// An object that carries a collection of role ids.
///
/// For members these are the roles they hold; for guilds, every role the guild defines.
pub trait RoleBearer {
    fn role_ids(&self) -> Vec<u64>;
}

/// A guild-like object with an owning user.
pub trait Owned {
    fn owner_id(&self) -> u64;
}

/// A user acting on a guild: identity plus the roles they hold there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    /// Discord user ID as a u64.
    pub id: u64,
    /// Role IDs the user holds in the guild.
    pub role_ids: Vec<u64>,
}

impl Actor {
    pub fn new(id: u64, role_ids: Vec<u64>) -> Self {
        Self { id, role_ids }
    }

    /// Builds an actor from a message author and the partial member sent with the message.
    ///
    /// Gateway message events include a partial member for guild messages. When it is
    /// missing the actor carries no roles, which still lets the guild owner through.
    ///
    /// # Arguments
    /// - `user` - The message author
    /// - `member` - Partial member data attached to the message, if any
    ///
    /// # Returns
    /// - `Actor` - Owned actor with the author's id and role ids
    pub fn from_message_author(user: &User, member: Option<&PartialMember>) -> Self {
        Self {
            id: user.id.get(),
            role_ids: member
                .map(|member| member.roles.iter().map(|role| role.get()).collect())
                .unwrap_or_default(),
        }
    }
}

impl Identifiable for Actor {
    fn id(&self) -> u64 {
        self.id
    }
}

impl RoleBearer for Actor {
    fn role_ids(&self) -> Vec<u64> {
        self.role_ids.clone()
    }
}

/// Owned copy of the guild fields needed for authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildSnapshot {
    /// Discord guild ID as a u64.
    pub id: u64,
    /// Discord user ID of the guild owner.
    pub owner_id: u64,
    /// Every role ID defined in the guild.
    pub role_ids: Vec<u64>,
    /// Channel and active thread IDs known to belong to the guild.
    pub channel_ids: Vec<u64>,
}

impl GuildSnapshot {
    /// Returns whether the channel belongs to this guild.
    pub fn has_channel(&self, channel_id: u64) -> bool {
        self.channel_ids.contains(&channel_id)
    }
}

impl From<&Guild> for GuildSnapshot {
    fn from(guild: &Guild) -> Self {
        let channel_ids = guild
            .channels
            .keys()
            .map(|channel| channel.get())
            .chain(guild.threads.iter().map(|thread| thread.id.get()))
            .collect();

        Self {
            id: Identifiable::id(guild),
            owner_id: Owned::owner_id(guild),
            role_ids: RoleBearer::role_ids(guild),
            channel_ids,
        }
    }
}

/// Partial guilds carry no channels; the caller fills `channel_ids` separately.
impl From<&PartialGuild> for GuildSnapshot {
    fn from(guild: &PartialGuild) -> Self {
        Self {
            id: Identifiable::id(guild),
            owner_id: Owned::owner_id(guild),
            role_ids: RoleBearer::role_ids(guild),
            channel_ids: Vec::new(),
        }
    }
}

impl Identifiable for GuildSnapshot {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Owned for GuildSnapshot {
    fn owner_id(&self) -> u64 {
        self.owner_id
    }
}

impl RoleBearer for GuildSnapshot {
    fn role_ids(&self) -> Vec<u64> {
        self.role_ids.clone()
    }
}

impl Identifiable for Member {
    fn id(&self) -> u64 {
        self.user.id.get()
    }
}

impl RoleBearer for Member {
    fn role_ids(&self) -> Vec<u64> {
        self.roles.iter().map(|role| role.get()).collect()
    }
}

impl Identifiable for Guild {
    fn id(&self) -> u64 {
        self.id.get()
    }
}

impl Owned for Guild {
    fn owner_id(&self) -> u64 {
        self.owner_id.get()
    }
}

impl RoleBearer for Guild {
    fn role_ids(&self) -> Vec<u64> {
        self.roles.keys().map(|role| role.get()).collect()
    }
}

impl Identifiable for PartialGuild {
    fn id(&self) -> u64 {
        self.id.get()
    }
}

impl Owned for PartialGuild {
    fn owner_id(&self) -> u64 {
        self.owner_id.get()
    }
}

impl RoleBearer for PartialGuild {
    fn role_ids(&self) -> Vec<u64> {
        self.roles.keys().map(|role| role.get()).collect()
    }
}
