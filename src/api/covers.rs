use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};

use crate::{covers, management, server::AppState, types::PixelSample, warning};

pub async fn get_album_cover_pixel_data(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<PixelSample>>, (StatusCode, &'static str)> {
    let snapshot = match management::current_snapshot(&state.session, &state.spotify).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warning!("{}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Error processing image"));
        }
    };

    let pixels = match snapshot.and_then(|s| s.album_cover_url) {
        Some(url) if !url.is_empty() => covers::pixelize(&state.http, &url).await,
        _ => covers::white_fallback(),
    };

    Ok(Json(pixels))
}
