use serenity::{
    all::{EditMember, GuildId, RoleId, UserId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    model::{ChatMember, ChatRole},
    service::discord::ChatPlatform,
};

/// Maximum number of members to fetch per API request.
///
/// Discord's API supports up to 1000 members per request.
const MEMBERS_PER_REQUEST: u64 = 1000;

/// Role list to send when removing `remove` from a member currently holding `current`.
pub(crate) fn remaining_roles(current: &[RoleId], remove: &[RoleId]) -> Vec<RoleId> {
    current
        .iter()
        .copied()
        .filter(|role| !remove.contains(role))
        .collect()
}

/// `ChatPlatform` backed by serenity's HTTP client.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatPlatform for SerenityPlatform {
    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<ChatRole>, AppError> {
        let roles = self.http.get_guild_roles(guild_id).await?;

        Ok(roles.iter().map(ChatRole::from_role).collect())
    }

    async fn bot_member(&self, guild_id: GuildId) -> Result<ChatMember, AppError> {
        let current_user = self.http.get_current_user().await?;
        let member = self.http.get_member(guild_id, current_user.id).await?;

        Ok(member.into())
    }

    /// Fetches every member with pagination, 1000 per request.
    ///
    /// Requires the GUILD_MEMBERS privileged intent.
    async fn guild_members(&self, guild_id: GuildId) -> Result<Vec<ChatMember>, AppError> {
        let mut all_members = Vec::new();
        let mut after: Option<u64> = None;

        loop {
            let members = self
                .http
                .get_guild_members(guild_id, Some(MEMBERS_PER_REQUEST), after)
                .await?;

            let fetched_count = members.len();
            after = members.last().map(|m| m.user.id.get());
            all_members.extend(members.into_iter().map(ChatMember::from));

            tracing::trace!(
                "Fetched {} members for guild {} (total so far: {})",
                fetched_count,
                guild_id,
                all_members.len()
            );

            if fetched_count < MEMBERS_PER_REQUEST as usize {
                break;
            }
        }

        Ok(all_members)
    }

    async fn guild_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<ChatMember, AppError> {
        let member = self.http.get_member(guild_id, user_id).await?;

        Ok(member.into())
    }

    /// Removes roles by replacing the member's role list with what remains.
    ///
    /// The member is re-read first so roles granted since `member` was fetched are kept.
    async fn remove_roles(
        &self,
        guild_id: GuildId,
        member: &ChatMember,
        roles: &[RoleId],
        reason: &str,
    ) -> Result<(), AppError> {
        let current = self.http.get_member(guild_id, member.user_id).await?;
        let remaining = remaining_roles(&current.roles, roles);

        guild_id
            .edit_member(
                &self.http,
                member.user_id,
                EditMember::new().roles(remaining).audit_log_reason(reason),
            )
            .await?;

        Ok(())
    }

    async fn add_role(
        &self,
        guild_id: GuildId,
        member: &ChatMember,
        role: RoleId,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, member.user_id, role, Some(reason))
            .await?;

        Ok(())
    }
}
