//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by services, the bot startup code and the
//! scheduler. Repositories return `sea_orm::DbErr` directly and services lift it with `?`.
//! Domain-specific failures live in their own submodules and convert into `AppError` through
//! `#[from]`.

pub mod config;
pub mod game_api;

use thiserror::Error;

use crate::error::{config::ConfigError, game_api::GameApiError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. None of these are
/// surfaced to chat users: the background sweep logs them, and the commands only report coarse
/// success or failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure talking to the game API (token exchange, unexpected status, bad payload).
    #[error(transparent)]
    GameApiErr(#[from] GameApiError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
