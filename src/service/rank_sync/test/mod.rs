use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use serenity::{
    all::{GuildId, RoleId, UserId},
    async_trait,
};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::{game_api::GameApiError, AppError},
    model::{ChatMember, ChatRole, ExternalGuildKey, Region, RosterMember},
    service::{
        battlenet::GameApi,
        discord::{platform::remaining_roles, ChatPlatform},
        rank_sync::{reconcile::AUDIT_REASON, RankSyncService},
    },
};

mod sync_member;

pub const MEMBER_ROLE: u64 = 10;
pub const OFFICER_ROLE: u64 = 11;
pub const BOT_ROLE: u64 = 12;
pub const ADMIN_ROLE: u64 = 13;

pub const BOT_USER: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCall {
    Remove { user: UserId, roles: Vec<RoleId> },
    Add { user: UserId, role: RoleId },
}

/// In-memory chat server applying role mutations to its own member list.
pub struct FakeChatPlatform {
    roles: Vec<ChatRole>,
    bot: ChatMember,
    members: Mutex<Vec<ChatMember>>,
    calls: Mutex<Vec<RoleCall>>,
    role_reads: Mutex<usize>,
    failing_removals: HashSet<UserId>,
    /// Roles granted right after the member list is read, as an admin would mid-pass.
    late_grants: Mutex<Vec<(UserId, RoleId)>>,
}

impl FakeChatPlatform {
    /// A guild with @everyone, Member, Officer, Bot (Manage Roles) and Admin, bottom to top.
    pub fn new(guild_id: GuildId) -> Self {
        let role = |id: u64, name: &str, position: u16, manages_roles: bool| ChatRole {
            id: RoleId::new(id),
            name: name.to_string(),
            position,
            manages_roles,
        };

        Self {
            roles: vec![
                role(guild_id.get(), "@everyone", 0, false),
                role(MEMBER_ROLE, "Member", 1, false),
                role(OFFICER_ROLE, "Officer", 3, false),
                role(BOT_ROLE, "Bot", 5, true),
                role(ADMIN_ROLE, "Admin", 8, false),
            ],
            bot: ChatMember {
                user_id: UserId::new(BOT_USER),
                name: "rankbot".to_string(),
                bot: true,
                roles: vec![RoleId::new(BOT_ROLE)],
            },
            members: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            role_reads: Mutex::new(0),
            failing_removals: HashSet::new(),
            late_grants: Mutex::new(Vec::new()),
        }
    }

    pub fn with_member(self, user_id: u64, name: &str, roles: &[u64]) -> Self {
        self.members.lock().unwrap().push(ChatMember {
            user_id: UserId::new(user_id),
            name: name.to_string(),
            bot: false,
            roles: roles.iter().copied().map(RoleId::new).collect(),
        });
        self
    }

    pub fn without_manage_roles(mut self) -> Self {
        for role in &mut self.roles {
            role.manages_roles = false;
        }
        self
    }

    pub fn failing_removals_for(mut self, user_id: u64) -> Self {
        self.failing_removals.insert(UserId::new(user_id));
        self
    }

    pub fn granting_after_listing(self, user_id: u64, role: u64) -> Self {
        self.late_grants
            .lock()
            .unwrap()
            .push((UserId::new(user_id), RoleId::new(role)));
        self
    }

    pub fn with_bot_member(self, user_id: u64, roles: &[u64]) -> Self {
        self.members.lock().unwrap().push(ChatMember {
            user_id: UserId::new(user_id),
            name: format!("bot-{}", user_id),
            bot: true,
            roles: roles.iter().copied().map(RoleId::new).collect(),
        });
        self
    }

    pub fn calls(&self) -> Vec<RoleCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn role_reads(&self) -> usize {
        *self.role_reads.lock().unwrap()
    }

    pub fn member_roles(&self, user_id: u64) -> Vec<RoleId> {
        self.members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.user_id.get() == user_id)
            .map(|m| m.roles.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatPlatform for FakeChatPlatform {
    async fn guild_roles(&self, _guild_id: GuildId) -> Result<Vec<ChatRole>, AppError> {
        *self.role_reads.lock().unwrap() += 1;
        Ok(self.roles.clone())
    }

    async fn bot_member(&self, _guild_id: GuildId) -> Result<ChatMember, AppError> {
        Ok(self.bot.clone())
    }

    async fn guild_members(&self, _guild_id: GuildId) -> Result<Vec<ChatMember>, AppError> {
        let mut members = self.members.lock().unwrap();
        let listed = members.clone();

        for (user_id, role) in self.late_grants.lock().unwrap().drain(..) {
            if let Some(stored) = members.iter_mut().find(|m| m.user_id == user_id) {
                stored.roles.push(role);
            }
        }

        Ok(listed)
    }

    async fn guild_member(
        &self,
        _guild_id: GuildId,
        user_id: UserId,
    ) -> Result<ChatMember, AppError> {
        self.members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.user_id == user_id)
            .cloned()
            .ok_or_else(|| serenity::Error::Other("Unknown Member").into())
    }

    async fn remove_roles(
        &self,
        _guild_id: GuildId,
        member: &ChatMember,
        roles: &[RoleId],
        reason: &str,
    ) -> Result<(), AppError> {
        assert_eq!(reason, AUDIT_REASON);
        self.calls.lock().unwrap().push(RoleCall::Remove {
            user: member.user_id,
            roles: roles.to_vec(),
        });

        if self.failing_removals.contains(&member.user_id) {
            return Err(serenity::Error::Other("Missing Access").into());
        }

        // Same replace-the-list call as production: re-read the member, send what remains
        let mut members = self.members.lock().unwrap();
        if let Some(stored) = members.iter_mut().find(|m| m.user_id == member.user_id) {
            stored.roles = remaining_roles(&stored.roles, roles);
        }

        Ok(())
    }

    async fn add_role(
        &self,
        _guild_id: GuildId,
        member: &ChatMember,
        role: RoleId,
        reason: &str,
    ) -> Result<(), AppError> {
        assert_eq!(reason, AUDIT_REASON);
        self.calls.lock().unwrap().push(RoleCall::Add {
            user: member.user_id,
            role,
        });

        let mut members = self.members.lock().unwrap();
        if let Some(stored) = members.iter_mut().find(|m| m.user_id == member.user_id) {
            if !stored.roles.contains(&role) {
                stored.roles.push(role);
            }
        }

        Ok(())
    }
}

/// In-memory game API serving fixed rosters and recording every request.
#[derive(Default)]
pub struct FakeGameApi {
    rosters: HashMap<ExternalGuildKey, Vec<RosterMember>>,
    failing: HashSet<ExternalGuildKey>,
    requests: Mutex<Vec<ExternalGuildKey>>,
}

impl FakeGameApi {
    pub fn with_member(
        mut self,
        realm: &str,
        guild: &str,
        name: &str,
        member_realm: &str,
        rank: u8,
    ) -> Self {
        self.rosters
            .entry(ExternalGuildKey::new(Region::Us, realm, guild))
            .or_default()
            .push(RosterMember {
                name: name.to_string(),
                realm_slug: member_realm.to_string(),
                rank,
            });
        self
    }

    pub fn failing(mut self, realm: &str, guild: &str) -> Self {
        self.failing
            .insert(ExternalGuildKey::new(Region::Us, realm, guild));
        self
    }

    pub fn requests(&self) -> Vec<ExternalGuildKey> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameApi for FakeGameApi {
    async fn fetch_guild_roster(
        &self,
        guild: &ExternalGuildKey,
    ) -> Result<Vec<RosterMember>, AppError> {
        self.requests.lock().unwrap().push(guild.clone());

        if self.failing.contains(guild) {
            return Err(GameApiError::UnexpectedStatus {
                url: format!("https://us.api.blizzard.com/{}", guild.guild_name),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }
            .into());
        }

        Ok(self.rosters.get(guild).cloned().unwrap_or_default())
    }
}

/// Creates a Discord guild whose in-game guild "Horde" on stormrage binds rank 3 to Officer and
/// rank 1 to Member.
pub async fn create_horde_guild(
    db: &sea_orm::DatabaseConnection,
) -> Result<GuildId, sea_orm::DbErr> {
    let guild = factory::discord_guild::DiscordGuildFactory::new(db)
        .rank_sync_scheduled(true)
        .build()
        .await?;
    let wow_guild = factory::wow_guild::WowGuildFactory::new(db, &guild.guild_id)
        .realm_slug("stormrage")
        .guild_name("Horde")
        .build()
        .await?;
    factory::create_guild_rank(db, wow_guild.id, 1, "Member").await?;
    factory::create_guild_rank(db, wow_guild.id, 3, "Officer").await?;

    Ok(GuildId::new(guild.guild_id.parse().unwrap()))
}

/// Binds Thrall of stormrage as the main character of user 42.
pub async fn create_thrall(
    db: &sea_orm::DatabaseConnection,
    guild_id: GuildId,
) -> Result<(), sea_orm::DbErr> {
    factory::main_character::MainCharacterFactory::new(db, &guild_id.to_string(), "42")
        .name("Thrall")
        .realm_slug("stormrage")
        .guild_name("Horde")
        .build()
        .await?;

    Ok(())
}
