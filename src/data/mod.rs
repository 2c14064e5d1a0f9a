//! Database repository layer.
//!
//! Repositories wrap the sea-orm entities of the configuration store and return domain models
//! from `crate::model`. The rank sync engine only reads from them, apart from recording the
//! time of the last guild sync and registering guilds as the bot joins them.

pub mod connected_realm;
pub mod discord_guild;
pub mod guild_rank;
pub mod main_character;

pub use connected_realm::ConnectedRealmRepository;
pub use discord_guild::DiscordGuildRepository;
pub use guild_rank::GuildRankRepository;
pub use main_character::MainCharacterRepository;

#[cfg(test)]
mod test;
