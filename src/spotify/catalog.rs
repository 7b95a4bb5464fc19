use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::{
    config,
    error::LookupError,
    types::{AlbumTracksResponse, PlaylistTracksResponse, Track},
};

/// Formats a track as `"<artist1>, <artist2>, ... - <title>"`, preserving
/// the artist ordering returned by the API.
pub fn format_track(track: &Track) -> String {
    let artists: Vec<&str> = track.artists.iter().map(|a| a.name.as_str()).collect();
    format!("{} - {}", artists.join(", "), track.name)
}

/// Fetches a single track and returns its artists and title.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token` - Current access token (empty before the first renewal)
/// * `id` - Spotify ID of the track
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The formatted `"artist - title"` line
/// - `Err(LookupError)` - Non-2xx status, rejected token, or a response
///   that does not look like a track
pub async fn get_track(client: &Client, token: &str, id: &str) -> Result<String, LookupError> {
    let api_url = format!("{uri}/tracks/{id}", uri = &config::spotify_apiurl());
    let track = fetch_json::<Track>(client, token, &api_url).await?;
    Ok(format_track(&track))
}

/// Fetches the tracks of an album and returns their artists and titles,
/// one formatted line per track, in album order.
///
/// Same failure conditions as [`get_track`]. Only the API's default page of
/// tracks is fetched; no pagination.
pub async fn get_album_tracks(
    client: &Client,
    token: &str,
    id: &str,
) -> Result<Vec<String>, LookupError> {
    let api_url = format!("{uri}/albums/{id}/tracks", uri = &config::spotify_apiurl());
    let response = fetch_json::<AlbumTracksResponse>(client, token, &api_url).await?;
    Ok(response.items.iter().map(format_track).collect())
}

/// Fetches the tracks of a playlist and returns their artists and titles,
/// one formatted line per entry, in playlist order.
///
/// Same failure conditions as [`get_track`]. Only the API's default page of
/// entries is fetched; no pagination.
pub async fn get_playlist_tracks(
    client: &Client,
    token: &str,
    id: &str,
) -> Result<Vec<String>, LookupError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl()
    );
    let response = fetch_json::<PlaylistTracksResponse>(client, token, &api_url).await?;
    Ok(response
        .items
        .iter()
        .map(|item| format_track(&item.track))
        .collect())
}

async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    token: &str,
    url: &str,
) -> Result<T, LookupError> {
    let response = client
        .get(url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(LookupError::Request)?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(LookupError::StaleToken);
    }
    if !status.is_success() {
        return Err(LookupError::Status(status));
    }

    response.json::<T>().await.map_err(LookupError::Malformed)
}
