//! Discord-side view of roles and members used during a sync pass.

use serenity::all::{Member, Role, RoleId, UserId};
use std::cmp::Reverse;

/// A Discord role with the data needed for hierarchy and permission checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRole {
    pub id: RoleId,
    pub name: String,
    /// Position in the guild's role hierarchy (higher = more important).
    pub position: u16,
    /// Whether the role grants Manage Roles (directly or through Administrator).
    pub manages_roles: bool,
}

impl ChatRole {
    pub fn from_role(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            position: role.position,
            manages_roles: role.permissions.manage_roles() || role.permissions.administrator(),
        }
    }

    /// Returns `true` if this role sits strictly below `other` in the hierarchy.
    ///
    /// Roles sharing a position are ordered by id, the older (smaller) id ranking higher.
    pub fn is_below(&self, other: &ChatRole) -> bool {
        (self.position, Reverse(self.id)) < (other.position, Reverse(other.id))
    }
}

/// A guild member as needed by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMember {
    pub user_id: UserId,
    pub name: String,
    pub bot: bool,
    /// Roles currently held, excluding the implicit @everyone role.
    pub roles: Vec<RoleId>,
}

impl From<Member> for ChatMember {
    fn from(member: Member) -> Self {
        Self {
            user_id: member.user.id,
            name: member.user.name,
            bot: member.user.bot,
            roles: member.roles,
        }
    }
}
