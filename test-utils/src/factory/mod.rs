//! Factory methods for creating test data.
//!
//! Each entity of the configuration store has its own factory module with a `Factory` struct
//! for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::create_guild(&db).await?;
//! let wow_guild = factory::create_wow_guild(&db, &guild.guild_id).await?;
//! let rank = factory::create_guild_rank(&db, wow_guild.id, 3, "Officer").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let character = factory::main_character::MainCharacterFactory::new(&db, &guild.guild_id, "42")
//!     .name("Thrall")
//!     .realm_slug("stormrage")
//!     .build()
//!     .await?;
//! ```

pub mod connected_realm;
pub mod discord_guild;
pub mod guild_rank;
pub mod helpers;
pub mod main_character;
pub mod wow_guild;

pub use connected_realm::create_connected_realm;
pub use discord_guild::create_guild;
pub use guild_rank::create_guild_rank;
pub use main_character::create_main_character;
pub use wow_guild::create_wow_guild;
