use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerState {
    pub item: Option<TrackItem>,
    #[serde(default)]
    pub progress_ms: u64,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub shuffle_state: bool,
    #[serde(default)]
    pub repeat_state: RepeatMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: AlbumInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumInfo {
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub product: Option<String>,
}

impl Profile {
    pub fn is_premium(&self) -> bool {
        self.product.as_deref() == Some("premium")
    }
}

/// Repeat setting of the player, `off` when upstream omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    Context,
    Track,
}

impl RepeatMode {
    /// Next mode in the `off -> context -> track -> off` cycle.
    pub fn next(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::Context,
            RepeatMode::Context => RepeatMode::Track,
            RepeatMode::Track => RepeatMode::Off,
        }
    }

    /// Value used in upstream query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::Context => "context",
            RepeatMode::Track => "track",
        }
    }
}

/// Track identifier as the plugin sees it: the upstream string id, or the
/// number `-1` when no identifier exists (placeholder, local files).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TrackId {
    Id(String),
    Missing(i32),
}

/// Denormalized view of "what is playing right now", produced fresh per
/// request and serialized straight to the plugin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub track_name: String,
    pub track_id: TrackId,
    pub track_time_seconds: u64,
    pub track_length_seconds: u64,
    pub track_looped_state: RepeatMode,
    pub shuffle_enabled: bool,
    pub is_playing: bool,
    pub artist_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_cover_url: Option<String>,
    pub is_premium: bool,
}

impl PlaybackSnapshot {
    /// Derives the snapshot from a raw player state, or `None` when the
    /// state carries no active item.
    ///
    /// Elapsed and total time are floored to whole seconds; the cover URL is
    /// the first album image, or the empty string when the album has none.
    pub fn from_player_state(state: PlayerState, is_premium: bool) -> Option<Self> {
        let item = state.item?;
        let track_id = match item.id {
            Some(id) => TrackId::Id(id),
            None => TrackId::Missing(-1),
        };
        let album_cover_url = item
            .album
            .images
            .first()
            .map(|image| image.url.clone())
            .unwrap_or_default();

        Some(PlaybackSnapshot {
            track_name: item.name,
            track_id,
            track_time_seconds: state.progress_ms / 1000,
            track_length_seconds: item.duration_ms / 1000,
            track_looped_state: state.repeat_state,
            shuffle_enabled: state.shuffle_state,
            is_playing: state.is_playing,
            artist_names: item.artists.into_iter().map(|a| a.name).collect(),
            album_cover_url: Some(album_cover_url),
            is_premium,
        })
    }

    /// Placeholder the plugin renders when nothing is playing. Note that
    /// `albumCoverUrl` is absent here while a real snapshot always carries
    /// it, empty string included.
    pub fn placeholder() -> Self {
        PlaybackSnapshot {
            track_name: "N/A".to_string(),
            track_id: TrackId::Missing(-1),
            track_time_seconds: 0,
            track_length_seconds: 0,
            track_looped_state: RepeatMode::Off,
            shuffle_enabled: false,
            is_playing: false,
            artist_names: vec!["N/A".to_string()],
            album_cover_url: None,
            is_premium: false,
        }
    }
}

/// One RGB sample of the cover-art grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
