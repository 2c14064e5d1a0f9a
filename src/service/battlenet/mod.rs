//! Battle.net game API access.
//!
//! The rank sync engine only needs guild rosters, so the seam is a single-method trait.
//! `BattleNetClient` is the production implementation; tests substitute an in-memory fake.

pub mod client;
pub mod roster;

use serenity::async_trait;

use crate::{
    error::AppError,
    model::{ExternalGuildKey, RosterMember},
};

pub use client::BattleNetClient;

/// Read access to in-game guild rosters.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Fetches the roster of an in-game guild.
    ///
    /// # Returns
    /// - `Ok(Vec<RosterMember>)`: Every character on the roster with its rank
    /// - `Err(AppError)`: Token, transport, timeout or non-success status; the caller treats
    ///   any error as "roster unavailable" for this pass
    async fn fetch_guild_roster(
        &self,
        guild: &ExternalGuildKey,
    ) -> Result<Vec<RosterMember>, AppError>;
}
