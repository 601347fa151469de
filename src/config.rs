//! Configuration management for the relay.
//!
//! All runtime settings come from environment variables, optionally seeded
//! from a `.env` file. [`load_env`] looks for that file next to the process
//! first and falls back to the per-user data directory, so a plain
//! `cargo run` in a checkout and an installed binary both pick up the same
//! keys. Every accessor returns a value: unset keys resolve to a default
//! (empty for the Spotify credentials) instead of aborting, and incomplete
//! credentials only surface later when a token refresh is attempted.

use std::{env, path::PathBuf};

/// Address the relay binds to when `SERVER_ADDRESS` is unset.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:52100";

/// Spotify Web API base used when `SPOTIFY_API_URL` is unset.
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Token endpoint used when `SPOTIFY_API_TOKEN_URL` is unset.
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from a `.env` file if one can be found.
///
/// The current working directory takes precedence. When it has no `.env`,
/// the per-user data directory is tried instead:
/// - Linux: `~/.local/share/bloxify-server/.env`
/// - macOS: `~/Library/Application Support/bloxify-server/.env`
/// - Windows: `%LOCALAPPDATA%/bloxify-server/.env`
///
/// The data directory is created on first run so the file has a place to
/// live. A missing file in both locations is not an error, variables may
/// just as well be set in the environment itself.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if a
/// data-dir `.env` exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    if dotenv::dotenv().is_ok() {
        return Ok(());
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("bloxify-server");
    async_fs::create_dir_all(&path)
        .await
        .map_err(|e| e.to_string())?;

    path.push(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Returns the socket address the relay listens on.
///
/// Read from `SERVER_ADDRESS`, defaulting to [`DEFAULT_SERVER_ADDRESS`].
/// The default port is the one the desktop plugin dials, so overriding it
/// only makes sense together with a matching plugin configuration.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the long-lived Spotify refresh token, empty when unset.
pub fn spotify_refresh_token() -> String {
    env::var("SPOTIFY_REFRESH_TOKEN").unwrap_or_default()
}

/// Returns the Spotify application client ID, empty when unset.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify application client secret, empty when unset.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default()
}

/// Returns the Spotify Web API base URL.
///
/// Read from `SPOTIFY_API_URL`, defaulting to [`DEFAULT_SPOTIFY_API_URL`].
/// Overriding this is mainly useful for pointing the relay at a stub
/// server during development.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the OAuth token-exchange endpoint.
///
/// Read from `SPOTIFY_API_TOKEN_URL`, defaulting to
/// [`DEFAULT_SPOTIFY_API_TOKEN_URL`].
pub fn spotify_api_token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}
