//! # Spotify Integration Module
//!
//! This module is the relay's only boundary with the Spotify Web API. It
//! covers the two concerns the relay has upstream: turning the configured
//! refresh token into short-lived access tokens, and the handful of player
//! endpoints the desktop plugin is allowed to drive.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 refresh-token grant:
//! - **Token Exchange**: Posts the `refresh_token` grant to the token endpoint
//! - **Basic Client Auth**: Sends `client_id:client_secret` as an HTTP Basic header
//! - **Strict Validation**: Rejects responses without a usable access token
//!
//! There is no interactive authorization flow here. The refresh token is
//! provisioned out of band and supplied through configuration; the relay
//! never sees a user's browser.
//!
//! ### Client Module
//!
//! [`client`] - Wraps the player endpoints behind [`client::SpotifyClient`]:
//! - `GET /me/player` - Current playback state, with 204 mapped to "nothing playing"
//! - `GET /me` - User profile, used for the Premium check
//! - `PUT /me/player/play` / `PUT /me/player/pause` - Resume and pause
//! - `POST /me/player/next` / `POST /me/player/previous` - Track skips
//! - `PUT /me/player/shuffle?state=` - Shuffle on or off
//! - `PUT /me/player/repeat?state=` - Repeat mode (`off`, `context`, `track`)
//!
//! ## Error Handling Philosophy
//!
//! Functions here report what failed and give up. There is no retry or
//! rate-limit handling: the relay serves a single local plugin polling at
//! human timescales, and the layers above decide whether a failure becomes
//! a placeholder response or an HTTP 500. Auth failures map to
//! [`RelayError::AuthRefresh`](crate::error::RelayError::AuthRefresh) and
//! everything else to
//! [`RelayError::Upstream`](crate::error::RelayError::Upstream).

pub mod auth;
pub mod client;
