//! Background tasks.

pub mod rank_sync;

pub use rank_sync::RankSyncScheduler;
