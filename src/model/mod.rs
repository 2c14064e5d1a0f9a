//! Domain models used by the rank sync engine.
//!
//! Entity models are converted into these types at the repository boundary so that services
//! work with parsed Discord ids, a typed `Region` and `u8` rank ids instead of raw strings and
//! integers.

pub mod character;
pub mod chat;
pub mod connected_realm;
pub mod guild;
pub mod rank_binding;
pub mod region;
pub mod roster;

pub use character::MainCharacter;
pub use chat::{ChatMember, ChatRole};
pub use connected_realm::ConnectedRealm;
pub use guild::DiscordGuild;
pub use rank_binding::{ExternalGuildKey, GuildRankBinding};
pub use region::Region;
pub use roster::{GuildRoster, RankSnapshot, RosterMember};
