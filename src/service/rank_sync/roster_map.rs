//! Builds the per-pass rank snapshot from rank bindings and live rosters.

use std::collections::{BTreeMap, HashMap};

use crate::{
    model::{ExternalGuildKey, GuildRankBinding, GuildRoster, RankSnapshot},
    service::battlenet::GameApi,
};

/// Fetches every in-game guild referenced by `bindings` once and indexes its members.
///
/// Bindings sharing a (region, realm, guild name) key merge into one rank table and one roster
/// request. A failed request only drops that guild from the snapshot; members resolving to it
/// are left untouched this pass.
///
/// # Returns
/// - `Some(RankSnapshot)`: Snapshot of every roster that could be fetched
/// - `None`: No bindings, rank sync is not configured for this guild
pub async fn build_snapshot(
    game: &dyn GameApi,
    bindings: &[GuildRankBinding],
) -> Option<RankSnapshot> {
    if bindings.is_empty() {
        return None;
    }

    let mut ranks_by_guild: BTreeMap<ExternalGuildKey, HashMap<u8, String>> = BTreeMap::new();
    for binding in bindings {
        ranks_by_guild
            .entry(binding.external_guild.clone())
            .or_default()
            .insert(binding.rank_id, binding.discord_role.clone());
    }

    let mut snapshot = RankSnapshot::new();
    for (key, ranks) in ranks_by_guild {
        match game.fetch_guild_roster(&key).await {
            Ok(members) => {
                let mut roster = GuildRoster::new(ranks);
                for member in members {
                    roster.insert_member(member);
                }

                tracing::debug!(
                    "Fetched roster of {} on {}-{} with {} members",
                    key.guild_name,
                    key.region,
                    key.realm_slug,
                    roster.member_count()
                );

                snapshot.insert(key, roster);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch roster of {} on {}-{}, skipping it this pass: {}",
                    key.guild_name,
                    key.region,
                    key.realm_slug,
                    e
                );
            }
        }
    }

    Some(snapshot)
}
