use bloxify_server::covers::{COVER_SIZE, pixel_grid, pixelize, white_fallback};
use image::{ImageBuffer, Rgb};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRID_LEN: usize = (COVER_SIZE * COVER_SIZE) as usize;

// Helper to encode a solid-color PNG in memory
fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(width, height, Rgb(rgb));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("png encoding should succeed");
    bytes
}

#[test]
fn test_pixel_grid_has_fixed_length() {
    // 1080 * 1080 samples regardless of the source dimensions
    let small = pixel_grid(&solid_png(64, 64, [10, 20, 30])).unwrap();
    assert_eq!(small.len(), GRID_LEN);

    let oblong = pixel_grid(&solid_png(320, 200, [10, 20, 30])).unwrap();
    assert_eq!(oblong.len(), GRID_LEN);
}

#[test]
fn test_pixel_grid_keeps_channel_order() {
    // A pure red cover must stay red in every sample. Resampling may wobble
    // a populated channel by a unit, but empty channels stay exactly zero.
    let grid = pixel_grid(&solid_png(64, 64, [255, 0, 0])).unwrap();

    assert!(grid.iter().all(|px| px.r >= 254));
    assert!(grid.iter().all(|px| px.g == 0 && px.b == 0));
}

#[test]
fn test_pixel_grid_rejects_garbage() {
    assert!(pixel_grid(b"definitely not an image").is_err());
    assert!(pixel_grid(&[]).is_err());
}

#[test]
fn test_white_fallback_wire_shape() {
    let fallback = white_fallback();
    assert_eq!(fallback.len(), 1);

    // The plugin keys on this exact document to clear the board
    assert_eq!(
        serde_json::to_value(&fallback).unwrap(),
        json!([{ "r": 255, "g": 255, "b": 255 }])
    );
}

#[tokio::test]
async fn test_pixelize_converts_served_cover() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/covers/album.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(solid_png(64, 64, [255, 0, 0]), "image/png"),
        )
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let grid = pixelize(&http, &format!("{}/covers/album.png", server.uri())).await;

    assert_eq!(grid.len(), GRID_LEN);
    assert_ne!(grid, white_fallback());
}

#[tokio::test]
async fn test_pixelize_falls_back_on_download_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/covers/album.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let grid = pixelize(&http, &format!("{}/covers/album.png", server.uri())).await;

    assert_eq!(grid, white_fallback());
}

#[tokio::test]
async fn test_pixelize_falls_back_on_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/covers/album.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("junk".as_bytes(), "image/png"))
        .mount(&server)
        .await;

    let http = reqwest::Client::new();
    let grid = pixelize(&http, &format!("{}/covers/album.png", server.uri())).await;

    assert_eq!(grid, white_fallback());
}
