//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects with an owner and roles
//! - `role::test_role_json` - Role JSON shared by the guild factory

pub mod guild;
pub mod role;

// Re-export commonly used functions for convenience
pub use guild::create_test_guild;
