use axum::{
    Extension, Router,
    routing::{get, post},
};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    SERVER_NAME, api, error,
    management::SessionManager,
    spotify::client::SpotifyClient,
    success,
};

/// Shared state handed to every request handler.
pub struct AppState {
    pub session: SessionManager,
    pub spotify: SpotifyClient,
    pub http: Client,
}

impl AppState {
    /// Assembles the state from explicit parts, used by tests to point
    /// the relay at stub servers.
    pub fn new(session: SessionManager, spotify: SpotifyClient, http: Client) -> Self {
        AppState {
            session,
            spotify,
            http,
        }
    }

    /// Assembles the state from the environment, sharing one HTTP client
    /// across token exchange, API calls and cover downloads.
    pub fn from_env() -> Self {
        let http = Client::new();
        AppState {
            session: SessionManager::from_env(http.clone()),
            spotify: SpotifyClient::from_env(http.clone()),
            http,
        }
    }
}

/// Builds the relay router with all plugin-facing routes.
///
/// Route names are part of the plugin protocol and use its camelCase
/// spelling verbatim.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/handshake", get(api::handshake))
        .route("/getPlayingTrackInfo", get(api::get_playing_track_info))
        .route(
            "/getAlbumCoverPixelData",
            get(api::get_album_cover_pixel_data),
        )
        .route("/pause", post(api::pause))
        .route("/togglePlay", post(api::toggle_play))
        .route("/next", post(api::next))
        .route("/previous", post(api::previous))
        .route("/toggleShuffle", post(api::toggle_shuffle))
        .route("/cycleLoopState", post(api::cycle_loop_state))
        .layer(Extension(state))
}

/// Binds the listener and serves the relay until the process ends.
pub async fn start_relay_server(addr: &str, state: Arc<AppState>) {
    let app = router(state);

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    success!("{} running at http://{}", SERVER_NAME, addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
