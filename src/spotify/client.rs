use reqwest::{Client, StatusCode};

use crate::{
    error::{RelayError, Result},
    types::{PlayerState, Profile, RepeatMode},
};

/// Playback commands that map to bodyless Spotify player endpoints.
///
/// Play and pause are idempotent state updates (`PUT`), while the skip
/// commands enqueue an action (`POST`). The distinction matters upstream:
/// sending a skip as `PUT` is rejected with a 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Next,
    Previous,
}

impl PlayerCommand {
    fn path(&self) -> &'static str {
        match self {
            PlayerCommand::Play => "me/player/play",
            PlayerCommand::Pause => "me/player/pause",
            PlayerCommand::Next => "me/player/next",
            PlayerCommand::Previous => "me/player/previous",
        }
    }

    fn operation(&self) -> &'static str {
        match self {
            PlayerCommand::Play => "play",
            PlayerCommand::Pause => "pause",
            PlayerCommand::Next => "skip next",
            PlayerCommand::Previous => "skip previous",
        }
    }
}

/// Thin client for the handful of Spotify Web API endpoints the relay uses.
///
/// Holds a shared [`reqwest::Client`] and the API base URL. The base is
/// configurable so tests can point the client at a local stub server; in
/// production it is the public `https://api.spotify.com/v1`.
///
/// The client is stateless with respect to authentication: every method
/// takes the bearer token as an argument, and token lifecycle is someone
/// else's problem.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_base: String,
}

impl SpotifyClient {
    /// Creates a client against the given API base URL.
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        SpotifyClient {
            http,
            api_base: api_base.into(),
        }
    }

    /// Creates a client from the `SPOTIFY_API_URL` environment setting.
    pub fn from_env(http: Client) -> Self {
        SpotifyClient::new(http, crate::config::spotify_api_url())
    }

    /// Fetches the current playback state from `GET /me/player`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(state))` when a player is active and upstream returned a
    ///   playback document
    /// - `Ok(None)` when upstream answered 204 or with an empty body, which
    ///   is how Spotify reports "no active device"
    ///
    /// # Errors
    ///
    /// Network failures, non-success statuses (including 401 for a stale
    /// token) and unparseable bodies all map to [`RelayError::Upstream`].
    pub async fn player_state(&self, token: &str) -> Result<Option<PlayerState>> {
        let response = self
            .http
            .get(format!("{}/me/player", self.api_base))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| RelayError::upstream("player state", e))?
            .error_for_status()
            .map_err(|e| RelayError::upstream("player state", e))?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::upstream("player state", e))?;
        if body.is_empty() {
            return Ok(None);
        }

        let state = serde_json::from_slice(&body)
            .map_err(|e| RelayError::upstream("player state", e))?;
        Ok(Some(state))
    }

    /// Fetches the authenticated user's profile from `GET /me`.
    pub async fn profile(&self, token: &str) -> Result<Profile> {
        let response = self
            .http
            .get(format!("{}/me", self.api_base))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| RelayError::upstream("profile", e))?
            .error_for_status()
            .map_err(|e| RelayError::upstream("profile", e))?;

        response
            .json()
            .await
            .map_err(|e| RelayError::upstream("profile", e))
    }

    /// Sends a bodyless playback command.
    ///
    /// Upstream responds 204 on success; any other outcome (no active
    /// device, restricted client, stale token) surfaces as an error.
    pub async fn command(&self, token: &str, command: PlayerCommand) -> Result<()> {
        let url = format!("{}/{}", self.api_base, command.path());
        let request = match command {
            PlayerCommand::Play | PlayerCommand::Pause => self.http.put(&url),
            PlayerCommand::Next | PlayerCommand::Previous => self.http.post(&url),
        };

        request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| RelayError::upstream(command.operation(), e))?
            .error_for_status()
            .map_err(|e| RelayError::upstream(command.operation(), e))?;

        Ok(())
    }

    /// Sets shuffle on or off via `PUT /me/player/shuffle?state=`.
    pub async fn set_shuffle(&self, token: &str, enabled: bool) -> Result<()> {
        self.http
            .put(format!(
                "{}/me/player/shuffle?state={}",
                self.api_base, enabled
            ))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| RelayError::upstream("shuffle", e))?
            .error_for_status()
            .map_err(|e| RelayError::upstream("shuffle", e))?;

        Ok(())
    }

    /// Sets the repeat mode via `PUT /me/player/repeat?state=`.
    pub async fn set_repeat(&self, token: &str, mode: RepeatMode) -> Result<()> {
        self.http
            .put(format!(
                "{}/me/player/repeat?state={}",
                self.api_base,
                mode.as_str()
            ))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| RelayError::upstream("repeat", e))?
            .error_for_status()
            .map_err(|e| RelayError::upstream("repeat", e))?;

        Ok(())
    }
}
