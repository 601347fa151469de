//! # API Module
//!
//! This module provides the HTTP endpoints the desktop plugin talks to.
//! All endpoints live on the local relay server and answer with either
//! plain text, JSON, or a bare status code.
//!
//! ## Endpoints
//!
//! ### Discovery
//!
//! - [`handshake`] - Returns the server name and version as plain text.
//!   The plugin probes this to find a running relay and to verify it is
//!   talking to the right program before trusting any other endpoint.
//!
//! ### Playback state
//!
//! - [`get_playing_track_info`] - Returns the current playback snapshot as
//!   JSON. Degrades to a fixed placeholder document when nothing is
//!   playing or upstream is unreachable, so the plugin always has
//!   something to render.
//! - [`get_album_cover_pixel_data`] - Returns the current album cover as a
//!   flat JSON array of RGB samples, or a single white sample when there
//!   is no cover to show.
//!
//! ### Playback control
//!
//! - [`pause`] - Pauses playback.
//! - [`toggle_play`] - Pauses or resumes depending on the current state.
//! - [`next`] / [`previous`] - Skips between tracks.
//! - [`toggle_shuffle`] - Flips shuffle relative to the current state.
//! - [`cycle_loop_state`] - Steps the repeat mode off, context, track.
//!
//! ## Error Behavior
//!
//! Control endpoints answer `200` with an empty body on success and `500`
//! with a short fixed message on failure. The two state endpoints prefer
//! degrading over failing; their only `500` is a token refresh that could
//! not produce a credential.
//!
//! ## Architecture
//!
//! Handlers are async functions wired into an [Axum](https://docs.rs/axum)
//! router by [`crate::server::router`]. Shared state arrives through an
//! [`Extension`](axum::Extension) layer carrying
//! [`AppState`](crate::server::AppState).

mod covers;
mod handshake;
mod player;

pub use covers::get_album_cover_pixel_data;
pub use handshake::handshake;
pub use player::cycle_loop_state;
pub use player::get_playing_track_info;
pub use player::next;
pub use player::pause;
pub use player::previous;
pub use player::toggle_play;
pub use player::toggle_shuffle;
