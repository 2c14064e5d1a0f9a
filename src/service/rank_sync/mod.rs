//! Rank synchronization engine.
//!
//! A sync pass for one Discord guild:
//! 1. load the guild's rank bindings (no bindings → nothing to do)
//! 2. snapshot the guild's roles and the bot's ceiling, stopping if the bot cannot manage roles
//! 3. fetch each referenced in-game roster once into a `RankSnapshot`
//! 4. load the connected realm topology
//! 5. plan and apply role changes member by member
//!
//! Failures below the pass level (one roster, one member, one mutation) are logged and skipped;
//! only failures that make the whole pass impossible are returned to the caller.

pub mod reconcile;
pub mod role_map;
pub mod roster_map;
pub mod topology;

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, UserId};

use crate::{
    data::{
        ConnectedRealmRepository, DiscordGuildRepository, GuildRankRepository,
        MainCharacterRepository,
    },
    error::AppError,
    model::{ChatMember, MainCharacter, RankSnapshot},
    service::{battlenet::GameApi, discord::ChatPlatform},
};

use reconcile::{apply_plan, PassContext, RankOutcome};
use role_map::RoleLookup;
use roster_map::build_snapshot;
use topology::RealmTopology;

/// Counters reported at the end of a guild pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    /// Members examined, bot accounts excluded.
    pub members: usize,
    /// Members whose roles were changed.
    pub updated: usize,
    /// Members with at least one failed role mutation.
    pub failed: usize,
}

/// Snapshots owned by one pass.
struct Pass {
    snapshot: RankSnapshot,
    roles: RoleLookup,
    topology: RealmTopology,
}

impl Pass {
    fn context(&self) -> PassContext<'_> {
        PassContext {
            snapshot: &self.snapshot,
            roles: &self.roles,
            topology: &self.topology,
        }
    }
}

enum MemberResult {
    Unchanged,
    Updated,
    Failed,
}

pub struct RankSyncService<'a> {
    db: &'a DatabaseConnection,
    chat: &'a dyn ChatPlatform,
    game: &'a dyn GameApi,
}

impl<'a> RankSyncService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        chat: &'a dyn ChatPlatform,
        game: &'a dyn GameApi,
    ) -> Self {
        Self { db, chat, game }
    }

    /// Synchronizes the rank role of every member of a guild.
    ///
    /// Bot accounts are skipped. Members are processed sequentially, yielding to the runtime between members so the
    /// gateway handlers keep running during long passes. Records `last_rank_sync_at` once the
    /// pass completes.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild to synchronize
    ///
    /// # Returns
    /// - `Ok(SyncSummary)`: Pass completed or was skipped (empty summary)
    /// - `Err(AppError)`: Configuration store or Discord enumeration failed
    pub async fn sync_guild(&self, guild_id: GuildId) -> Result<SyncSummary, AppError> {
        let Some(pass) = self.prepare_pass(guild_id).await? else {
            return Ok(SyncSummary::default());
        };

        let characters: HashMap<UserId, MainCharacter> = MainCharacterRepository::new(self.db)
            .get_by_guild_id(guild_id.get())
            .await?
            .into_iter()
            .map(|character| (character.user_id, character))
            .collect();

        let members = self.chat.guild_members(guild_id).await?;
        let context = pass.context();
        let mut summary = SyncSummary::default();

        for member in &members {
            if member.bot {
                continue;
            }

            summary.members += 1;

            match self
                .reconcile_member(guild_id, &context, characters.get(&member.user_id), member)
                .await
            {
                MemberResult::Unchanged => {}
                MemberResult::Updated => summary.updated += 1,
                MemberResult::Failed => summary.failed += 1,
            }

            tokio::task::yield_now().await;
        }

        DiscordGuildRepository::new(self.db)
            .update_last_rank_sync(guild_id.get())
            .await?;

        tracing::info!(
            "Rank sync for guild {} done: {} members, {} updated, {} failed",
            guild_id,
            summary.members,
            summary.updated,
            summary.failed
        );

        Ok(summary)
    }

    /// Synchronizes the rank role of a single member.
    ///
    /// # Returns
    /// - `Ok(Some(RankOutcome))`: What the reconciler decided for the member
    /// - `Ok(None)`: Rank sync is not configured or the bot cannot manage roles
    /// - `Err(AppError)`: Configuration store or Discord lookup failed
    pub async fn sync_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<RankOutcome>, AppError> {
        let Some(pass) = self.prepare_pass(guild_id).await? else {
            return Ok(None);
        };

        let character = MainCharacterRepository::new(self.db)
            .find_main(user_id.get(), guild_id.get())
            .await?;
        let member = self.chat.guild_member(guild_id, user_id).await?;

        let context = pass.context();
        let outcome = context.plan_member(character.as_ref(), &member);
        self.apply_outcome(guild_id, &member, &outcome).await;

        Ok(Some(outcome))
    }

    /// Loads everything a pass needs, or `None` when the guild should be skipped.
    async fn prepare_pass(&self, guild_id: GuildId) -> Result<Option<Pass>, AppError> {
        let bindings = GuildRankRepository::new(self.db)
            .get_by_guild_id(guild_id.get())
            .await?;

        if bindings.is_empty() {
            tracing::debug!("No rank bindings for guild {}, skipping rank sync", guild_id);
            return Ok(None);
        }

        let guild_roles = self.chat.guild_roles(guild_id).await?;
        let bot = self.chat.bot_member(guild_id).await?;
        let roles = RoleLookup::build(guild_id, guild_roles, &bot);

        tracing::debug!(
            "Bot ceiling in guild {} is '{}' at position {}",
            guild_id,
            roles.ceiling().name,
            roles.ceiling().position
        );

        if !roles.can_manage_roles() {
            tracing::info!(
                "Bot lacks the Manage Roles permission in guild {}, skipping rank sync",
                guild_id
            );
            return Ok(None);
        }

        let Some(snapshot) = build_snapshot(self.game, &bindings).await else {
            return Ok(None);
        };

        if snapshot.is_empty() {
            tracing::warn!(
                "No roster could be fetched for guild {}, skipping rank sync",
                guild_id
            );
            return Ok(None);
        }

        tracing::debug!(
            "Rank snapshot for guild {} holds {} rosters from {} bindings",
            guild_id,
            snapshot.len(),
            bindings.len()
        );

        let topology =
            RealmTopology::from_links(ConnectedRealmRepository::new(self.db).get_all().await?);

        Ok(Some(Pass {
            snapshot,
            roles,
            topology,
        }))
    }

    async fn reconcile_member(
        &self,
        guild_id: GuildId,
        context: &PassContext<'_>,
        character: Option<&MainCharacter>,
        member: &ChatMember,
    ) -> MemberResult {
        let outcome = context.plan_member(character, member);

        self.apply_outcome(guild_id, member, &outcome).await
    }

    async fn apply_outcome(
        &self,
        guild_id: GuildId,
        member: &ChatMember,
        outcome: &RankOutcome,
    ) -> MemberResult {
        match outcome {
            RankOutcome::NoMainCharacter => {
                tracing::trace!(
                    "{} ({}) has no main character in guild {}",
                    member.name,
                    member.user_id,
                    guild_id
                );
                MemberResult::Unchanged
            }
            RankOutcome::NotInRoster => {
                tracing::debug!(
                    "Main character of {} ({}) not found on any roster for guild {}",
                    member.name,
                    member.user_id,
                    guild_id
                );
                MemberResult::Unchanged
            }
            RankOutcome::UnmappedRank(rank) => {
                tracing::debug!(
                    "Rank {} of {} ({}) has no role binding in guild {}",
                    rank,
                    member.name,
                    member.user_id,
                    guild_id
                );
                MemberResult::Unchanged
            }
            RankOutcome::RoleMissing(role) => {
                tracing::warn!(
                    "Role '{}' bound for {} ({}) does not exist in guild {}",
                    role,
                    member.name,
                    member.user_id,
                    guild_id
                );
                MemberResult::Unchanged
            }
            RankOutcome::AboveCeiling(role) => {
                tracing::info!(
                    "Cannot update {} ({}) in guild {}: role '{}' is not below the bot's highest role",
                    member.name,
                    member.user_id,
                    guild_id,
                    role
                );
                MemberResult::Unchanged
            }
            RankOutcome::Planned(plan) if plan.is_empty() => MemberResult::Unchanged,
            RankOutcome::Planned(plan) => {
                if apply_plan(self.chat, guild_id, member, plan).await {
                    MemberResult::Updated
                } else {
                    MemberResult::Failed
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test;
