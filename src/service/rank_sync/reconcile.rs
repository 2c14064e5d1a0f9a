//! Per-member rank reconciliation.
//!
//! Planning is pure: it decides which roles to revoke and grant from the pass snapshots without
//! touching Discord. Applying the plan is the only step that performs mutations.

use serenity::all::{GuildId, RoleId};

use crate::{
    model::{ChatMember, MainCharacter, RankSnapshot},
    service::{
        discord::ChatPlatform,
        rank_sync::{role_map::RoleLookup, topology::RealmTopology},
    },
};

/// Audit log reason attached to every role mutation.
pub const AUDIT_REASON: &str = "Guild Rank Sync";

/// Role changes for one member. `remove` never contains `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePlan {
    pub remove: Vec<RoleId>,
    pub add: Option<RoleId>,
}

impl RolePlan {
    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_none()
    }
}

/// Result of planning one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    /// The member has not selected a main character in this guild.
    NoMainCharacter,
    /// The main character was not found on any fetched roster.
    NotInRoster,
    /// The character's rank has no binding.
    UnmappedRank(u8),
    /// The bound role does not exist on the server.
    RoleMissing(String),
    /// The bound role sits at or above the bot's ceiling.
    AboveCeiling(String),
    Planned(RolePlan),
}

/// Read-only state shared by every member of one sync pass.
pub struct PassContext<'a> {
    pub snapshot: &'a RankSnapshot,
    pub roles: &'a RoleLookup,
    pub topology: &'a RealmTopology,
}

impl PassContext<'_> {
    /// Finds the character's current rank, searching its home realm then its connected realms.
    ///
    /// The first realm hosting a fetched roster that lists the character wins. Members are
    /// always looked up by the character's home realm since rosters index them by their own
    /// realm, not the guild's.
    fn find_rank(&self, character: &MainCharacter) -> Option<(u8, Option<&str>)> {
        self.topology
            .candidates(character.region, &character.realm_slug)
            .iter()
            .find_map(|realm| {
                let roster = self.snapshot.get(&character.guild_key_on(realm))?;
                let rank = roster.member_rank(&character.realm_slug, &character.name)?;

                Some((rank, roster.role_for_rank(rank)))
            })
    }

    /// Decides the role changes for one member without performing them.
    pub fn plan_member(
        &self,
        character: Option<&MainCharacter>,
        member: &ChatMember,
    ) -> RankOutcome {
        let Some(character) = character else {
            return RankOutcome::NoMainCharacter;
        };

        let Some((rank, role_name)) = self.find_rank(character) else {
            return RankOutcome::NotInRoster;
        };

        let Some(role_name) = role_name else {
            return RankOutcome::UnmappedRank(rank);
        };

        let Some(target) = self.roles.by_name(role_name) else {
            return RankOutcome::RoleMissing(role_name.to_string());
        };

        if !self.roles.is_manageable(target) {
            return RankOutcome::AboveCeiling(target.name.clone());
        }

        let remove = member
            .roles
            .iter()
            .copied()
            .filter(|id| *id != target.id)
            .filter(|id| {
                self.roles
                    .get(*id)
                    .is_some_and(|role| self.roles.is_manageable(role))
            })
            .collect();

        let add = (!member.roles.contains(&target.id)).then_some(target.id);

        RankOutcome::Planned(RolePlan { remove, add })
    }
}

/// Applies a plan: removals in one call, then the addition in one call.
///
/// A failed removal is logged and the addition is still attempted.
///
/// # Returns
/// - `true`: Every mutation of the plan succeeded
/// - `false`: At least one mutation failed (already logged)
pub async fn apply_plan(
    chat: &dyn ChatPlatform,
    guild_id: GuildId,
    member: &ChatMember,
    plan: &RolePlan,
) -> bool {
    let mut succeeded = true;

    if !plan.remove.is_empty() {
        tracing::info!(
            "Removing roles {:?} from {} ({}) in guild {}",
            plan.remove,
            member.name,
            member.user_id,
            guild_id
        );

        if let Err(e) = chat
            .remove_roles(guild_id, member, &plan.remove, AUDIT_REASON)
            .await
        {
            tracing::error!(
                "Failed to remove roles from {} ({}) in guild {}: {}",
                member.name,
                member.user_id,
                guild_id,
                e
            );
            succeeded = false;
        }
    }

    if let Some(role) = plan.add {
        tracing::info!(
            "Adding role {} to {} ({}) in guild {}",
            role,
            member.name,
            member.user_id,
            guild_id
        );

        if let Err(e) = chat.add_role(guild_id, member, role, AUDIT_REASON).await {
            tracing::error!(
                "Failed to add role {} to {} ({}) in guild {}: {}",
                role,
                member.name,
                member.user_id,
                guild_id,
                e
            );
            succeeded = false;
        }
    }

    succeeded
}
