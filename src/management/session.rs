use reqwest::Client;
use tokio::sync::RwLock;

use crate::{config, error::Result, spotify, warning};

/// Holds the Spotify access token for the lifetime of the process.
///
/// The token starts out empty and is only obtained when something asks for
/// it, so the relay boots fine without credentials and misconfiguration
/// surfaces on the first request that needs upstream. An empty string is
/// the "no credential" sentinel throughout; there is no expiry tracking,
/// the token is simply used until upstream rejects it.
///
/// Refreshing performs the network exchange without holding the lock and
/// commits the result afterwards. Concurrent refreshes therefore race and
/// the last writer wins, which is harmless: every successfully issued
/// token is valid.
pub struct SessionManager {
    http: Client,
    token_url: String,
    refresh_token: String,
    client_id: String,
    client_secret: String,
    credential: RwLock<String>,
}

impl SessionManager {
    pub fn new(
        http: Client,
        token_url: impl Into<String>,
        refresh_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        SessionManager {
            http,
            token_url: token_url.into(),
            refresh_token: refresh_token.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            credential: RwLock::new(String::new()),
        }
    }

    /// Builds a manager from the `SPOTIFY_*` environment settings.
    pub fn from_env(http: Client) -> Self {
        SessionManager::new(
            http,
            config::spotify_api_token_url(),
            config::spotify_refresh_token(),
            config::spotify_client_id(),
            config::spotify_client_secret(),
        )
    }

    /// Returns whatever token is cached right now, possibly empty.
    pub async fn current(&self) -> String {
        self.credential.read().await.clone()
    }

    /// Returns a non-empty token, refreshing once if none is cached.
    pub async fn ensure(&self) -> Result<String> {
        let current = self.current().await;
        if !current.is_empty() {
            return Ok(current);
        }

        self.refresh().await
    }

    /// Exchanges the refresh token for a new access token and caches it.
    ///
    /// On failure the cached token is cleared, so a later [`ensure`] will
    /// try the exchange again instead of reusing a credential that may have
    /// been the problem.
    ///
    /// [`ensure`]: SessionManager::ensure
    pub async fn refresh(&self) -> Result<String> {
        let outcome = spotify::auth::exchange_refresh_token(
            &self.http,
            &self.token_url,
            &self.refresh_token,
            &self.client_id,
            &self.client_secret,
        )
        .await;

        let mut credential = self.credential.write().await;
        match outcome {
            Ok(token) => {
                *credential = token.clone();
                Ok(token)
            }
            Err(e) => {
                credential.clear();
                warning!("Error refreshing access token: {}", e);
                Err(e)
            }
        }
    }

    /// Drops the cached token so the next [`ensure`] performs a fresh exchange.
    ///
    /// [`ensure`]: SessionManager::ensure
    pub async fn invalidate(&self) {
        self.credential.write().await.clear();
    }
}
