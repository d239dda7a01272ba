//! Wander Bot Test Utils
//!
//! Shared testing utilities for the relay bot. Provides factories that build serenity
//! model objects by deserializing JSON, simulating what Discord's API would return, so
//! tests can exercise the code that consumes serenity types without a gateway
//! connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_guild;
//!
//! #[test]
//! fn guild_owner_is_read() {
//!     let guild = create_test_guild(123, "Wander", 12345, &[(111, "Mods")], &[456]);
//!     assert_eq!(guild.owner_id.get(), 12345);
//! }
//! ```

pub mod serenity;
