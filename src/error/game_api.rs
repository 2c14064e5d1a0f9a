use thiserror::Error;

/// Failures while talking to the Battle.net API.
///
/// The rank sync treats every variant the same way: the roster it was fetching is skipped for
/// this pass. The distinction only matters for logs.
#[derive(Error, Debug)]
pub enum GameApiError {
    /// Client-credentials token exchange failed.
    #[error("Failed to obtain Battle.net access token: {0}")]
    Token(String),

    /// The API answered with a non-success status code.
    #[error("Battle.net request to {url} failed with status {status}")]
    UnexpectedStatus {
        /// Requested URL (without credentials)
        url: String,
        /// HTTP status returned by the API
        status: reqwest::StatusCode,
    },

    /// The request URL could not be built from the guild reference.
    #[error("Invalid Battle.net URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
