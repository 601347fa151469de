use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};

use crate::{
    management,
    server::AppState,
    spotify::client::PlayerCommand,
    types::PlaybackSnapshot,
    warning,
};

pub async fn get_playing_track_info(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<PlaybackSnapshot>, (StatusCode, &'static str)> {
    match management::current_snapshot(&state.session, &state.spotify).await {
        Ok(Some(snapshot)) => Ok(Json(snapshot)),
        Ok(None) => Ok(Json(PlaybackSnapshot::placeholder())),
        Err(e) => {
            warning!("{}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching track info",
            ))
        }
    }
}

pub async fn pause(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    match management::send_command(&state.session, &state.spotify, PlayerCommand::Pause).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            warning!("Error pausing playback: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to pause"))
        }
    }
}

pub async fn toggle_play(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    match management::toggle_play(&state.session, &state.spotify).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            warning!("Error toggling playback: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to toggle playback"))
        }
    }
}

pub async fn next(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    match management::send_command(&state.session, &state.spotify, PlayerCommand::Next).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            warning!("Error skipping to next track: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to skip next"))
        }
    }
}

pub async fn previous(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    match management::send_command(&state.session, &state.spotify, PlayerCommand::Previous).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            warning!("Error skipping to previous track: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to skip previous"))
        }
    }
}

pub async fn toggle_shuffle(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    match management::toggle_shuffle(&state.session, &state.spotify).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            warning!("Error toggling shuffle: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to toggle shuffle"))
        }
    }
}

pub async fn cycle_loop_state(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    match management::cycle_repeat(&state.session, &state.spotify).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            warning!("Error cycling loop state: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to cycle loop state",
            ))
        }
    }
}
