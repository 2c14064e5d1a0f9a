//! Discord access used by the rank sync engine.
//!
//! The engine talks to Discord through `ChatPlatform` so the reconciler can be exercised against
//! an in-memory fake. `SerenityPlatform` is the production implementation over serenity's HTTP
//! client.

pub mod platform;

use serenity::{
    all::{GuildId, RoleId, UserId},
    async_trait,
};

use crate::{
    error::AppError,
    model::{ChatMember, ChatRole},
};

pub use platform::SerenityPlatform;

/// Role and member operations on a chat server.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// All roles of the guild, including @everyone.
    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<ChatRole>, AppError>;

    /// The bot's own member record in the guild.
    async fn bot_member(&self, guild_id: GuildId) -> Result<ChatMember, AppError>;

    /// Every member of the guild.
    async fn guild_members(&self, guild_id: GuildId) -> Result<Vec<ChatMember>, AppError>;

    /// A single member of the guild.
    async fn guild_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<ChatMember, AppError>;

    /// Removes `roles` from `member` in a single call.
    async fn remove_roles(
        &self,
        guild_id: GuildId,
        member: &ChatMember,
        roles: &[RoleId],
        reason: &str,
    ) -> Result<(), AppError>;

    /// Grants `role` to `member` in a single call.
    async fn add_role(
        &self,
        guild_id: GuildId,
        member: &ChatMember,
        role: RoleId,
        reason: &str,
    ) -> Result<(), AppError>;
}
