use bloxify_server::types::{PlaybackSnapshot, PlayerState, Profile, RepeatMode, TrackId};
use bloxify_server::utils::basic_authorization;
use serde_json::json;

// Helper to build a player state the way it arrives off the wire
fn player_state(value: serde_json::Value) -> PlayerState {
    serde_json::from_value(value).expect("player state should deserialize")
}

#[test]
fn test_placeholder_document_shape() {
    let value = serde_json::to_value(PlaybackSnapshot::placeholder()).unwrap();

    // The placeholder must not carry a cover URL at all
    assert!(value.get("albumCoverUrl").is_none());

    // Full document, field for field
    assert_eq!(
        value,
        json!({
            "trackName": "N/A",
            "trackId": -1,
            "trackTimeSeconds": 0,
            "trackLengthSeconds": 0,
            "trackLoopedState": "off",
            "shuffleEnabled": false,
            "isPlaying": false,
            "artistNames": ["N/A"],
            "isPremium": false,
        })
    );
}

#[test]
fn test_snapshot_from_full_player_state() {
    let state = player_state(json!({
        "is_playing": true,
        "progress_ms": 83_456,
        "shuffle_state": true,
        "repeat_state": "context",
        // Fields the relay does not care about must be tolerated
        "timestamp": 1_727_000_000_000u64,
        "device": { "id": "dev-1", "volume_percent": 64 },
        "item": {
            "id": "3n3Ppam7vgaVa1iaRUc9Lp",
            "name": "Mr. Brightside",
            "duration_ms": 222_586,
            "artists": [{ "name": "The Killers" }],
            "album": { "images": [
                { "url": "https://i.scdn.co/image/large" },
                { "url": "https://i.scdn.co/image/small" }
            ]}
        }
    }));

    let snapshot = PlaybackSnapshot::from_player_state(state, true).unwrap();
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(
        value,
        json!({
            "trackName": "Mr. Brightside",
            "trackId": "3n3Ppam7vgaVa1iaRUc9Lp",
            "trackTimeSeconds": 83,
            "trackLengthSeconds": 222,
            "trackLoopedState": "context",
            "shuffleEnabled": true,
            "isPlaying": true,
            "artistNames": ["The Killers"],
            "albumCoverUrl": "https://i.scdn.co/image/large",
            "isPremium": true,
        })
    );
}

#[test]
fn test_snapshot_floors_times_to_whole_seconds() {
    for (progress_ms, expected) in [(0, 0), (999, 0), (1000, 1), (1500, 1), (59_999, 59)] {
        let state = player_state(json!({
            "progress_ms": progress_ms,
            "item": { "name": "x", "duration_ms": 59_999 }
        }));

        let snapshot = PlaybackSnapshot::from_player_state(state, false).unwrap();
        assert_eq!(snapshot.track_time_seconds, expected, "progress {}ms", progress_ms);
        assert_eq!(snapshot.track_length_seconds, 59);
    }
}

#[test]
fn test_missing_track_id_becomes_minus_one() {
    // Local files have no upstream id; the plugin expects -1 in that case
    let state = player_state(json!({
        "item": { "name": "ripped.mp3", "duration_ms": 1000 }
    }));

    let snapshot = PlaybackSnapshot::from_player_state(state, false).unwrap();
    assert_eq!(snapshot.track_id, TrackId::Missing(-1));

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["trackId"], json!(-1));
}

#[test]
fn test_album_without_artwork_yields_empty_url() {
    let state = player_state(json!({
        "item": {
            "name": "obscure b-side",
            "duration_ms": 180_000,
            "album": { "images": [] }
        }
    }));

    let snapshot = PlaybackSnapshot::from_player_state(state, false).unwrap();

    // Unlike the placeholder, a real snapshot always carries the field
    assert_eq!(snapshot.album_cover_url.as_deref(), Some(""));
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["albumCoverUrl"], json!(""));
}

#[test]
fn test_artist_order_is_preserved() {
    let state = player_state(json!({
        "item": {
            "name": "collab",
            "duration_ms": 200_000,
            "artists": [
                { "name": "Lead" },
                { "name": "Feature One" },
                { "name": "Feature Two" }
            ]
        }
    }));

    let snapshot = PlaybackSnapshot::from_player_state(state, false).unwrap();
    assert_eq!(
        snapshot.artist_names,
        vec!["Lead", "Feature One", "Feature Two"]
    );
}

#[test]
fn test_player_state_defaults_for_sparse_documents() {
    // A bare document must not be a deserialization error
    let state = player_state(json!({}));

    assert!(state.item.is_none());
    assert_eq!(state.progress_ms, 0);
    assert!(!state.is_playing);
    assert!(!state.shuffle_state);
    assert_eq!(state.repeat_state, RepeatMode::Off);

    // And without an item there is no snapshot to derive
    assert!(PlaybackSnapshot::from_player_state(state, true).is_none());
}

#[test]
fn test_repeat_mode_cycle() {
    assert_eq!(RepeatMode::Off.next(), RepeatMode::Context);
    assert_eq!(RepeatMode::Context.next(), RepeatMode::Track);
    assert_eq!(RepeatMode::Track.next(), RepeatMode::Off);

    // Three steps bring every mode back to itself
    for mode in [RepeatMode::Off, RepeatMode::Context, RepeatMode::Track] {
        assert_eq!(mode.next().next().next(), mode);
    }
}

#[test]
fn test_repeat_mode_wire_spelling() {
    assert_eq!(RepeatMode::Off.as_str(), "off");
    assert_eq!(RepeatMode::Context.as_str(), "context");
    assert_eq!(RepeatMode::Track.as_str(), "track");

    let mode: RepeatMode = serde_json::from_value(json!("track")).unwrap();
    assert_eq!(mode, RepeatMode::Track);
    assert_eq!(serde_json::to_value(RepeatMode::Context).unwrap(), json!("context"));
}

#[test]
fn test_premium_flag_requires_premium_product() {
    let premium: Profile = serde_json::from_value(json!({ "product": "premium" })).unwrap();
    assert!(premium.is_premium());

    // Any other product tier, and a profile without one, count as free
    let free: Profile = serde_json::from_value(json!({ "product": "free" })).unwrap();
    assert!(!free.is_premium());

    let absent: Profile = serde_json::from_value(json!({})).unwrap();
    assert!(!absent.is_premium());
}

#[test]
fn test_basic_authorization_known_vector() {
    assert_eq!(basic_authorization("id", "secret"), "Basic aWQ6c2VjcmV0");

    // Empty credentials still produce a syntactically valid header value
    assert_eq!(basic_authorization("", ""), "Basic Og==");
}
