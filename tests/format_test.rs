use serde_json::json;
use spotresolve::spotify::catalog::format_track;
use spotresolve::types::{AlbumTracksResponse, Artist, PlaylistTracksResponse, Track};

// Helper function to create a test track
fn create_test_track(name: &str, artists: &[&str]) -> Track {
    Track {
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| Artist {
                name: a.to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_format_track_single_artist() {
    let track = create_test_track("One More Time", &["Daft Punk"]);
    assert_eq!(format_track(&track), "Daft Punk - One More Time");
}

#[test]
fn test_format_track_joins_artists_in_api_order() {
    let track = create_test_track("T2", &["B", "C"]);
    assert_eq!(format_track(&track), "B, C - T2");

    // Reversed input order must show up reversed in the output
    let reversed = create_test_track("T2", &["C", "B"]);
    assert_eq!(format_track(&reversed), "C, B - T2");
}

#[test]
fn test_format_track_is_deterministic() {
    let track = create_test_track("Y", &["X"]);
    assert_eq!(format_track(&track), format_track(&track));
}

#[test]
fn test_album_response_maps_items_in_order() {
    let value = json!({
        "items": [
            {"artists": [{"name": "A"}], "name": "T1"},
            {"artists": [{"name": "B"}, {"name": "C"}], "name": "T2"}
        ]
    });

    let response: AlbumTracksResponse = serde_json::from_value(value).unwrap();
    let lines: Vec<String> = response.items.iter().map(format_track).collect();

    assert_eq!(lines, vec!["A - T1", "B, C - T2"]);
}

#[test]
fn test_album_response_keeps_item_count() {
    let value = json!({
        "items": [
            {"artists": [{"name": "A"}], "name": "T1"},
            {"artists": [{"name": "A"}], "name": "T2"},
            {"artists": [{"name": "A"}], "name": "T3"}
        ]
    });

    let response: AlbumTracksResponse = serde_json::from_value(value).unwrap();

    // N items in, N formatted lines out
    assert_eq!(response.items.len(), 3);
    let lines: Vec<String> = response.items.iter().map(format_track).collect();
    assert_eq!(lines, vec!["A - T1", "A - T2", "A - T3"]);
}

#[test]
fn test_playlist_response_unwraps_nested_track() {
    let value = json!({
        "items": [
            {"track": {"artists": [{"name": "X"}], "name": "Y"}}
        ]
    });

    let response: PlaylistTracksResponse = serde_json::from_value(value).unwrap();
    let lines: Vec<String> = response
        .items
        .iter()
        .map(|item| format_track(&item.track))
        .collect();

    assert_eq!(lines, vec!["X - Y"]);
}

#[test]
fn test_track_without_artists_is_rejected() {
    // A track body missing the artists field must fail to decode instead
    // of formatting an empty line
    let value = json!({"name": "Orphan"});
    assert!(serde_json::from_value::<Track>(value).is_err());
}

#[test]
fn test_playlist_item_without_track_is_rejected() {
    let value = json!({"items": [{"added_at": "2020-01-01T00:00:00Z"}]});
    assert!(serde_json::from_value::<PlaylistTracksResponse>(value).is_err());
}
