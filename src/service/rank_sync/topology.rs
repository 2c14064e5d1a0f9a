//! Connected realm resolution.
//!
//! Realms are linked in "connected realm" groups whose guilds may hold characters from any realm
//! of the group. The topology answers which realms a character's guild may be registered on.

use std::collections::HashMap;

use crate::model::{ConnectedRealm, Region};

/// Region-scoped connected realm links, loaded once per sync pass.
#[derive(Debug, Clone, Default)]
pub struct RealmTopology {
    /// (region, realm slug) → connected realm slugs in registration order.
    links: HashMap<(Region, String), Vec<String>>,
}

impl RealmTopology {
    /// Builds the topology from connected realm registrations.
    ///
    /// Registrations are ordered by position before indexing, so callers may pass them in any
    /// order.
    pub fn from_links(mut registrations: Vec<ConnectedRealm>) -> Self {
        registrations.sort_by_key(|r| r.position);

        let mut links: HashMap<(Region, String), Vec<String>> = HashMap::new();
        for registration in registrations {
            links
                .entry((registration.region, registration.realm_slug))
                .or_default()
                .push(registration.connected_realm_slug);
        }

        Self { links }
    }

    /// Realms to search for a character of `realm_slug`: the realm itself, then its connected
    /// realms in registration order, without duplicates.
    pub fn candidates(&self, region: Region, realm_slug: &str) -> Vec<String> {
        let home = realm_slug.trim().to_lowercase();
        let mut candidates = vec![home.clone()];

        if let Some(connected) = self.links.get(&(region, home)) {
            for realm in connected {
                if !candidates.contains(realm) {
                    candidates.push(realm.clone());
                }
            }
        }

        candidates
    }
}
