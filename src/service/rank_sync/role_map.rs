//! Snapshot of a guild's Discord roles as seen by the bot.

use std::collections::HashMap;

use serenity::all::{GuildId, RoleId};

use crate::model::{ChatMember, ChatRole};

/// Name and id keyed view of a guild's roles plus the bot's ceiling.
///
/// Built fresh on every pass since roles may be renamed or moved at any time.
#[derive(Debug, Clone)]
pub struct RoleLookup {
    by_name: HashMap<String, ChatRole>,
    by_id: HashMap<RoleId, ChatRole>,
    /// The bot's highest role; only roles strictly below it can be granted or revoked.
    ceiling: ChatRole,
    everyone: RoleId,
    can_manage_roles: bool,
}

impl RoleLookup {
    /// Builds the lookup from the guild's roles and the bot's member record.
    ///
    /// When several roles share a name, the highest one the bot can manage wins, falling back to
    /// the highest overall.
    pub fn build(guild_id: GuildId, roles: Vec<ChatRole>, bot: &ChatMember) -> Self {
        let everyone = RoleId::new(guild_id.get());

        let by_id: HashMap<RoleId, ChatRole> =
            roles.into_iter().map(|role| (role.id, role)).collect();

        let everyone_role = by_id.get(&everyone).cloned().unwrap_or(ChatRole {
            id: everyone,
            name: "@everyone".to_string(),
            position: 0,
            manages_roles: false,
        });

        let bot_roles: Vec<&ChatRole> = bot.roles.iter().filter_map(|id| by_id.get(id)).collect();

        let ceiling = bot_roles
            .iter()
            .copied()
            .fold(everyone_role.clone(), |highest, role| {
                if highest.is_below(role) {
                    role.clone()
                } else {
                    highest
                }
            });

        let can_manage_roles =
            everyone_role.manages_roles || bot_roles.iter().any(|role| role.manages_roles);

        let mut by_name: HashMap<String, ChatRole> = HashMap::new();
        for role in by_id.values() {
            if role.id == everyone {
                continue;
            }

            match by_name.get(&role.name) {
                Some(current) if !prefer(role, current, &ceiling) => {}
                _ => {
                    by_name.insert(role.name.clone(), role.clone());
                }
            }
        }

        Self {
            by_name,
            by_id,
            ceiling,
            everyone,
            can_manage_roles,
        }
    }

    pub fn by_name(&self, name: &str) -> Option<&ChatRole> {
        self.by_name.get(name)
    }

    pub fn get(&self, id: RoleId) -> Option<&ChatRole> {
        self.by_id.get(&id)
    }

    pub fn ceiling(&self) -> &ChatRole {
        &self.ceiling
    }

    /// Whether the bot holds Manage Roles (or Administrator) in this guild.
    pub fn can_manage_roles(&self) -> bool {
        self.can_manage_roles
    }

    pub fn is_everyone(&self, id: RoleId) -> bool {
        id == self.everyone
    }

    /// Whether the bot may grant or revoke `role`.
    pub fn is_manageable(&self, role: &ChatRole) -> bool {
        !self.is_everyone(role.id) && role.is_below(&self.ceiling)
    }
}

/// Whether `candidate` should replace `current` for a shared role name.
fn prefer(candidate: &ChatRole, current: &ChatRole, ceiling: &ChatRole) -> bool {
    let candidate_manageable = candidate.is_below(ceiling);
    let current_manageable = current.is_below(ceiling);

    match (candidate_manageable, current_manageable) {
        (true, false) => true,
        (false, true) => false,
        _ => current.is_below(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::UserId;

    const GUILD: u64 = 1000;

    fn role(id: u64, name: &str, position: u16, manages_roles: bool) -> ChatRole {
        ChatRole {
            id: RoleId::new(id),
            name: name.to_string(),
            position,
            manages_roles,
        }
    }

    fn bot(roles: &[u64]) -> ChatMember {
        ChatMember {
            user_id: UserId::new(1),
            name: "rankbot".to_string(),
            bot: true,
            roles: roles.iter().copied().map(RoleId::new).collect(),
        }
    }

    fn guild_roles() -> Vec<ChatRole> {
        vec![
            role(GUILD, "@everyone", 0, false),
            role(10, "Member", 1, false),
            role(11, "Officer", 3, false),
            role(12, "Bot", 5, true),
            role(13, "Admin", 8, false),
        ]
    }

    #[test]
    fn ceiling_is_bots_highest_role() {
        let lookup = RoleLookup::build(GuildId::new(GUILD), guild_roles(), &bot(&[10, 12]));

        assert_eq!(lookup.ceiling().id, RoleId::new(12));
        assert!(lookup.can_manage_roles());
    }

    #[test]
    fn ceiling_falls_back_to_everyone() {
        let lookup = RoleLookup::build(GuildId::new(GUILD), guild_roles(), &bot(&[]));

        assert!(lookup.is_everyone(lookup.ceiling().id));
        assert!(!lookup.can_manage_roles());
        assert!(!lookup.is_manageable(lookup.by_name("Member").unwrap()));
    }

    #[test]
    fn only_roles_strictly_below_ceiling_are_manageable() {
        let lookup = RoleLookup::build(GuildId::new(GUILD), guild_roles(), &bot(&[12]));

        assert!(lookup.is_manageable(lookup.by_name("Officer").unwrap()));
        assert!(!lookup.is_manageable(lookup.by_name("Bot").unwrap()));
        assert!(!lookup.is_manageable(lookup.by_name("Admin").unwrap()));
        assert!(!lookup.is_manageable(lookup.get(RoleId::new(GUILD)).unwrap()));
    }

    #[test]
    fn everyone_is_not_looked_up_by_name() {
        let lookup = RoleLookup::build(GuildId::new(GUILD), guild_roles(), &bot(&[12]));

        assert!(lookup.by_name("@everyone").is_none());
    }

    #[test]
    fn duplicate_names_prefer_manageable_role() {
        let mut roles = guild_roles();
        roles.push(role(20, "Officer", 9, false));

        let lookup = RoleLookup::build(GuildId::new(GUILD), roles, &bot(&[12]));

        assert_eq!(lookup.by_name("Officer").unwrap().id, RoleId::new(11));
    }

    #[test]
    fn duplicate_names_prefer_highest_manageable_role() {
        let mut roles = guild_roles();
        roles.push(role(21, "Officer", 4, false));

        let lookup = RoleLookup::build(GuildId::new(GUILD), roles, &bot(&[12]));

        assert_eq!(lookup.by_name("Officer").unwrap().id, RoleId::new(21));
    }

    #[test]
    fn administrator_on_everyone_grants_manage_roles() {
        let mut roles = guild_roles();
        roles[0].manages_roles = true;

        let lookup = RoleLookup::build(GuildId::new(GUILD), roles, &bot(&[10]));

        assert!(lookup.can_manage_roles());
    }
}
