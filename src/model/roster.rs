//! Per-pass snapshot of in-game guild rosters and their rank bindings.
//!
//! A `RankSnapshot` is built once per sync pass from the guild's rank bindings and live roster
//! data, and dropped at the end of the pass. It is keyed by `ExternalGuildKey` rather than nested
//! region → realm → guild maps, so a lookup either finds the whole roster or nothing.

use std::collections::HashMap;

use crate::model::ExternalGuildKey;

/// A roster entry returned by the game API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterMember {
    pub name: String,
    /// Realm the character lives on, which may differ from the guild's realm on connected realms.
    pub realm_slug: String,
    pub rank: u8,
}

/// Rank table and membership of one in-game guild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildRoster {
    /// Rank id → Discord role name, merged from every binding on this guild.
    ranks: HashMap<u8, String>,
    /// Character realm slug → lowercased character name → rank id.
    members: HashMap<String, HashMap<String, u8>>,
}

impl GuildRoster {
    pub fn new(ranks: HashMap<u8, String>) -> Self {
        Self {
            ranks,
            members: HashMap::new(),
        }
    }

    pub fn insert_member(&mut self, member: RosterMember) {
        self.members
            .entry(member.realm_slug.trim().to_lowercase())
            .or_default()
            .insert(member.name.to_lowercase(), member.rank);
    }

    /// Rank of the character `name` from `realm_slug`, if it is on this roster.
    pub fn member_rank(&self, realm_slug: &str, name: &str) -> Option<u8> {
        self.members
            .get(&realm_slug.to_lowercase())?
            .get(&name.to_lowercase())
            .copied()
    }

    /// Discord role name bound to `rank`, if any.
    pub fn role_for_rank(&self, rank: u8) -> Option<&str> {
        self.ranks.get(&rank).map(String::as_str)
    }

    pub fn member_count(&self) -> usize {
        self.members.values().map(HashMap::len).sum()
    }
}

/// All rosters fetched for one Discord guild during a sync pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankSnapshot {
    guilds: HashMap<ExternalGuildKey, GuildRoster>,
}

impl RankSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ExternalGuildKey, roster: GuildRoster) {
        self.guilds.insert(key, roster);
    }

    pub fn get(&self, key: &ExternalGuildKey) -> Option<&GuildRoster> {
        self.guilds.get(key)
    }

    /// Number of rosters successfully fetched.
    pub fn len(&self) -> usize {
        self.guilds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guilds.is_empty()
    }
}
