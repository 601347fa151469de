//! Album cover to pixel-grid conversion.
//!
//! The plugin renders covers on a board of colored cells and cannot decode
//! image formats itself, so the relay ships it raw RGB samples instead of
//! the original JPEG.

use image::imageops::FilterType;
use reqwest::Client;

use crate::{
    error::{RelayError, Result},
    types::PixelSample,
    warning,
};

/// Edge length covers are normalized to before sampling.
pub const COVER_SIZE: u32 = 1080;

/// The grid served when no cover is available or processing fails.
///
/// A single white sample; the plugin stretches it over the whole board.
pub fn white_fallback() -> Vec<PixelSample> {
    vec![PixelSample {
        r: 255,
        g: 255,
        b: 255,
    }]
}

/// Decodes raw image bytes into the fixed-size RGB grid.
///
/// The image is resized to exactly [`COVER_SIZE`] square, ignoring aspect
/// ratio, so the output length is always `COVER_SIZE * COVER_SIZE` samples
/// in row-major order. Spotify covers are square already; the exact resize
/// just makes the length invariant hold for arbitrary input.
///
/// This is CPU-bound and synchronous, run it through `spawn_blocking` from
/// async contexts.
pub fn pixel_grid(bytes: &[u8]) -> Result<Vec<PixelSample>> {
    let image = image::load_from_memory(bytes).map_err(RelayError::image)?;
    let resized = image.resize_exact(COVER_SIZE, COVER_SIZE, FilterType::Lanczos3);
    let rgb = resized.to_rgb8();

    let pixels = rgb
        .into_raw()
        .chunks_exact(3)
        .map(|px| PixelSample {
            r: px[0],
            g: px[1],
            b: px[2],
        })
        .collect();

    Ok(pixels)
}

/// Downloads a cover and converts it to the pixel grid.
///
/// Never fails: download or decode problems are logged and degrade to
/// [`white_fallback`], matching how the rest of the read path degrades to
/// placeholders.
pub async fn pixelize(http: &Client, url: &str) -> Vec<PixelSample> {
    match fetch_and_convert(http, url).await {
        Ok(pixels) => pixels,
        Err(e) => {
            warning!("Error processing album cover: {}", e);
            white_fallback()
        }
    }
}

async fn fetch_and_convert(http: &Client, url: &str) -> Result<Vec<PixelSample>> {
    let bytes = http
        .get(url)
        .send()
        .await
        .map_err(RelayError::image)?
        .error_for_status()
        .map_err(RelayError::image)?
        .bytes()
        .await
        .map_err(RelayError::image)?;

    tokio::task::spawn_blocking(move || pixel_grid(&bytes))
        .await
        .map_err(RelayError::image)?
}
