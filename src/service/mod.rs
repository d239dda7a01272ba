//! Relay business logic.
//!
//! - `authorization` - Owner-or-role checks and authorized role mutations
//! - `relay_config` - Per-guild watched channels and output channel store
//! - `message_relay` - Forwarding decision for incoming messages
//! - `command` - Prefix command execution and reply text

pub mod authorization;
pub mod command;
pub mod message_relay;
pub mod relay_config;
