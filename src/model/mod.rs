//! Domain models for the relay.
//!
//! - `guild_config` - Per-guild watched channels, output channel and authorized roles
//! - `identity` - Capability traits over Discord objects plus owned actor/guild snapshots
//! - `message` - Incoming message fields and the relay decision
//! - `command` - Prefix command parsing

pub mod command;
pub mod guild_config;
pub mod identity;
pub mod message;
