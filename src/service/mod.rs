//! Service layer.
//!
//! - `battlenet`: game API access (guild rosters) behind the `GameApi` trait
//! - `discord`: chat platform access (roles, members, role mutations) behind `ChatPlatform`
//! - `rank_sync`: the rank synchronization engine built on both

pub mod battlenet;
pub mod discord;
pub mod rank_sync;
