//! Discord bot integration.
//!
//! The bot registers guilds as they become available, signals the rank sync scheduler once the
//! gateway connection is ready, and serves the rank sync prefix commands.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, used to register guilds
//! - `GUILD_MEMBERS` - Member enumeration for guild sync (privileged intent)
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Prefix commands
//! - `MESSAGE_CONTENT` - Reading command text (privileged intent)
//!
//! Privileged intents must be enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
