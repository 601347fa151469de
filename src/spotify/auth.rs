use reqwest::{Client, header};
use serde_json::Value;

use crate::{
    error::{RelayError, Result},
    utils,
};

/// Exchanges a long-lived refresh token for a fresh access token.
///
/// Performs the OAuth 2.0 `refresh_token` grant against the Spotify token
/// endpoint. The application credentials are sent as an HTTP Basic
/// `Authorization` header (base64 of `client_id:client_secret`), which is
/// the variant of the flow Spotify requires for confidential clients that
/// were issued a client secret.
///
/// # Arguments
///
/// * `http` - Shared HTTP client used for the request
/// * `token_url` - Token endpoint, normally `https://accounts.spotify.com/api/token`
/// * `refresh_token` - Refresh token obtained during initial authorization
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Spotify application client secret
///
/// # Returns
///
/// Returns the new access token string on success. The token is a bearer
/// credential valid for roughly an hour; callers are expected to cache it
/// and come back here once upstream starts rejecting it.
///
/// # Errors
///
/// Every failure mode maps to [`RelayError::AuthRefresh`]:
/// - Network errors reaching the token endpoint
/// - Non-success HTTP status (invalid credentials, revoked refresh token)
/// - A response body without a usable `access_token` field
pub async fn exchange_refresh_token(
    http: &Client,
    token_url: &str,
    refresh_token: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String> {
    let response = http
        .post(token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_authorization(client_id, client_secret),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| RelayError::AuthRefresh(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RelayError::AuthRefresh(format!(
            "token endpoint returned {}: {}",
            status, body
        )));
    }

    let json: Value = response
        .json()
        .await
        .map_err(|e| RelayError::AuthRefresh(e.to_string()))?;

    match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(RelayError::AuthRefresh(
            "token response did not contain an access token".to_string(),
        )),
    }
}
