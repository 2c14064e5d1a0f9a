//! Guild roster endpoint payload and URL.

use serde::Deserialize;
use url::Url;

use crate::{
    error::{game_api::GameApiError, AppError},
    model::{ExternalGuildKey, RosterMember},
    util::slug::slugify,
};

const ROSTER_LOCALE: &str = "en_US";

#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub members: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    pub character: RosterCharacter,
    pub rank: u8,
}

#[derive(Debug, Deserialize)]
pub struct RosterCharacter {
    pub name: String,
    pub realm: RealmRef,
}

#[derive(Debug, Deserialize)]
pub struct RealmRef {
    pub slug: String,
}

impl From<RosterEntry> for RosterMember {
    fn from(entry: RosterEntry) -> Self {
        Self {
            name: entry.character.name,
            realm_slug: entry.character.realm.slug.to_lowercase(),
            rank: entry.rank,
        }
    }
}

impl RosterResponse {
    pub fn into_members(self) -> Vec<RosterMember> {
        self.members.into_iter().map(RosterMember::from).collect()
    }
}

/// Builds the profile API roster URL for an in-game guild.
///
/// `base_url` is the regional API host, e.g. `https://eu.api.blizzard.com`.
pub fn roster_url(base_url: &str, guild: &ExternalGuildKey) -> Result<Url, AppError> {
    let mut url = Url::parse(base_url).map_err(GameApiError::from)?;
    url.set_path(&format!(
        "/data/wow/guild/{}/{}/roster",
        guild.realm_slug,
        slugify(&guild.guild_name)
    ));
    url.query_pairs_mut()
        .append_pair("namespace", &format!("profile-{}", guild.region))
        .append_pair("locale", ROSTER_LOCALE);

    Ok(url)
}
