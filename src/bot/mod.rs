//! Discord bot integration for the message relay.
//!
//! This module connects the relay core to Discord. Event handlers translate serenity
//! objects into relay calls: messages are parsed as relay commands or run through the
//! forwarding decision, and channel and role deletions are pruned from guild configs.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild, channel and role events and populate the guild cache
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read message text for commands and relaying (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
