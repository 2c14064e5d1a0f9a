//! Battle.net API client with a cached client-credentials token.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, ClientId, ClientSecret, EmptyExtraTokenFields, EndpointNotSet, EndpointSet,
    RevocationErrorResponseType, StandardErrorResponse, StandardRevocableToken,
    StandardTokenIntrospectionResponse, StandardTokenResponse, TokenResponse, TokenUrl,
};
use reqwest::StatusCode;
use serenity::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::{
    error::{game_api::GameApiError, AppError},
    model::{ExternalGuildKey, RosterMember},
    service::battlenet::{
        roster::{roster_url, RosterResponse},
        GameApi,
    },
};

/// Refresh the token this long before Battle.net says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Lifetime assumed when the token response carries no `expires_in`.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// OAuth2 client with only the token endpoint configured (client credentials flow).
pub(crate) type BattleNetOAuthClient = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
struct CachedToken {
    secret: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Game API client for the Battle.net profile API.
///
/// Cheap to clone; clones share the HTTP connection pool and the cached access token.
#[derive(Clone)]
pub struct BattleNetClient {
    http: reqwest::Client,
    oauth_client: BattleNetOAuthClient,
    token: Arc<RwLock<Option<CachedToken>>>,
}

impl BattleNetClient {
    /// Creates a client for the given application credentials.
    ///
    /// # Arguments
    /// - `http`: Shared HTTP client (redirects disabled, request timeout set)
    /// - `client_id` / `client_secret`: Battle.net application credentials
    /// - `token_url`: Battle.net OAuth token endpoint
    ///
    /// # Returns
    /// - `Ok(BattleNetClient)`: Client ready to use; no token is fetched until the first request
    /// - `Err(AppError::GameApiErr)`: `token_url` is not a valid URL
    pub fn new(
        http: reqwest::Client,
        client_id: &str,
        client_secret: &str,
        token_url: &str,
    ) -> Result<Self, AppError> {
        let oauth_client = Client::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_token_uri(TokenUrl::new(token_url.to_string()).map_err(GameApiError::from)?);

        Ok(Self {
            http,
            oauth_client,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Returns a valid access token, exchanging client credentials when the cache is empty or
    /// about to expire.
    async fn access_token(&self) -> Result<String, AppError> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref().filter(|t| !t.is_expired()) {
                return Ok(token.secret.clone());
            }
        }

        let mut cached = self.token.write().await;
        // Another task may have refreshed while we waited for the write lock
        if let Some(token) = cached.as_ref().filter(|t| !t.is_expired()) {
            return Ok(token.secret.clone());
        }

        let response = self
            .oauth_client
            .exchange_client_credentials()
            .request_async(&self.http)
            .await
            .map_err(|e| GameApiError::Token(e.to_string()))?;

        let lifetime = response.expires_in().unwrap_or(DEFAULT_TOKEN_LIFETIME);
        let token = CachedToken {
            secret: response.access_token().secret().clone(),
            expires_at: Instant::now() + lifetime.saturating_sub(TOKEN_EXPIRY_MARGIN),
        };
        let secret = token.secret.clone();
        *cached = Some(token);

        tracing::debug!("Obtained Battle.net access token valid for {:?}", lifetime);

        Ok(secret)
    }

    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }
}

#[async_trait]
impl GameApi for BattleNetClient {
    async fn fetch_guild_roster(
        &self,
        guild: &ExternalGuildKey,
    ) -> Result<Vec<RosterMember>, AppError> {
        let url = roster_url(&guild.region.api_base_url(), guild)?;
        let token = self.access_token().await?;

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.invalidate_token().await;
            }

            return Err(GameApiError::UnexpectedStatus {
                url: url.to_string(),
                status,
            }
            .into());
        }

        let roster: RosterResponse = response.json().await?;

        Ok(roster.into_members())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_invalid_token_url() {
        let result = BattleNetClient::new(reqwest::Client::new(), "id", "secret", "not a url");

        assert!(matches!(result, Err(AppError::GameApiErr(_))));
    }

    #[tokio::test]
    async fn serves_cached_token_until_expiry() {
        let client = BattleNetClient::new(
            reqwest::Client::new(),
            "id",
            "secret",
            "https://oauth.battle.net/token",
        )
        .unwrap();

        *client.token.write().await = Some(CachedToken {
            secret: "cached".to_string(),
            expires_at: Instant::now() + Duration::from_secs(600),
        });

        assert_eq!(client.access_token().await.unwrap(), "cached");

        client.invalidate_token().await;
        assert!(client.token.read().await.is_none());
    }

    #[test]
    fn expired_token_is_detected() {
        let token = CachedToken {
            secret: "old".to_string(),
            expires_at: Instant::now() - Duration::from_secs(1),
        };

        assert!(token.is_expired());
    }
}
