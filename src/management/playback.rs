//! Playback orchestration on top of the Spotify client.
//!
//! Everything the HTTP surface does with upstream goes through here. Two
//! rules shape this module:
//!
//! 1. The read path degrades instead of failing. When the player state
//!    cannot be fetched or nothing is playing, [`current_snapshot`] reports
//!    `None` and the handlers serve a fixed placeholder document, so the
//!    plugin always has something to render. The only hard failure on that
//!    path is a token refresh that does not produce a credential.
//! 2. The write path reuses whatever token is already cached and never
//!    refreshes. Until some read endpoint has primed the session, control
//!    calls go upstream with an empty bearer token and fail there; the
//!    plugin polls the track info endpoint continuously, so in practice
//!    the session is primed long before the first button press.

use crate::{
    error::Result,
    management::SessionManager,
    spotify::client::{PlayerCommand, SpotifyClient},
    types::{PlaybackSnapshot, RepeatMode},
    warning,
};

/// Builds the playback snapshot served to the plugin.
///
/// Refreshes the session if needed, reads the player state and, when a
/// track is actually loaded, the user's Premium flag. Player-state and
/// profile failures are logged and degrade to `None` or to
/// `isPremium: false` respectively; only a failed token refresh surfaces
/// as an error.
pub async fn current_snapshot(
    session: &SessionManager,
    spotify: &SpotifyClient,
) -> Result<Option<PlaybackSnapshot>> {
    let token = session.ensure().await?;

    let state = match spotify.player_state(&token).await {
        Ok(state) => state,
        Err(e) => {
            warning!("Error getting currently playing track: {}", e);
            return Ok(None);
        }
    };

    match state {
        Some(state) if state.item.is_some() => {
            let is_premium = premium_status(session, spotify).await;
            Ok(PlaybackSnapshot::from_player_state(state, is_premium))
        }
        _ => Ok(None),
    }
}

/// Fetches whether the account is a Premium one, defaulting to `false`.
///
/// Any failure along the way is logged and reported as "not Premium"; the
/// flag gates client-side features and is not worth failing a snapshot
/// over.
async fn premium_status(session: &SessionManager, spotify: &SpotifyClient) -> bool {
    let token = match session.ensure().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Error fetching user profile: {}", e);
            return false;
        }
    };

    match spotify.profile(&token).await {
        Ok(profile) => profile.is_premium(),
        Err(e) => {
            warning!("Error fetching user profile: {}", e);
            false
        }
    }
}

/// Forwards a bodyless player command using the cached token.
pub async fn send_command(
    session: &SessionManager,
    spotify: &SpotifyClient,
    command: PlayerCommand,
) -> Result<()> {
    let token = session.current().await;
    spotify.command(&token, command).await
}

/// Pauses when something is playing, otherwise resumes.
///
/// Reads the player state first and picks the opposite command. An
/// unreadable state is an error; an empty one (no active device) counts
/// as "not playing" and resolves to play.
pub async fn toggle_play(session: &SessionManager, spotify: &SpotifyClient) -> Result<()> {
    let token = session.current().await;

    let playing = spotify
        .player_state(&token)
        .await?
        .map(|state| state.is_playing)
        .unwrap_or(false);

    let command = if playing {
        PlayerCommand::Pause
    } else {
        PlayerCommand::Play
    };
    spotify.command(&token, command).await
}

/// Flips shuffle relative to the current player state.
///
/// With no active device the current state counts as off, so the first
/// toggle always lands on `state=true`.
pub async fn toggle_shuffle(session: &SessionManager, spotify: &SpotifyClient) -> Result<()> {
    let token = session.current().await;

    let enabled = spotify
        .player_state(&token)
        .await?
        .map(|state| state.shuffle_state)
        .unwrap_or(false);

    spotify.set_shuffle(&token, !enabled).await
}

/// Advances the repeat mode one step along off, context, track, off.
pub async fn cycle_repeat(session: &SessionManager, spotify: &SpotifyClient) -> Result<()> {
    let token = session.current().await;

    let mode = spotify
        .player_state(&token)
        .await?
        .map(|state| state.repeat_state)
        .unwrap_or(RepeatMode::Off);

    spotify.set_repeat(&token, mode.next()).await
}
