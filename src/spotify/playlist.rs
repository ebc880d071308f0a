use reqwest::Client;

use crate::{
    config,
    spotify::ApiError,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, GetUserPlaylistsResponse,
        Playlist,
    },
};

/// Retrieves the user's playlists for the name-based reuse check.
pub async fn list(token: &str, user_id: &str) -> Result<Vec<Playlist>, ApiError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists?limit=50",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(ApiError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status(status, body));
    }

    let json = response
        .json::<GetUserPlaylistsResponse>()
        .await
        .map_err(ApiError::Decode)?;

    Ok(json.items)
}

/// Creates a new public playlist under the given user.
pub async fn create(token: &str, user_id: &str, name: &str) -> Result<Playlist, ApiError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: format!("Generated by {}", env!("CARGO_PKG_NAME")),
        public: true,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .map_err(ApiError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status(status, body));
    }

    response.json::<Playlist>().await.map_err(ApiError::Decode)
}

/// Adds the accumulated track URIs to a playlist in one batched call.
///
/// An empty URI list is a local no-op: `Ok(None)` comes back without any
/// request hitting the wire, so an empty folder never causes a spurious
/// remote call.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<Option<AddTracksResponse>, ApiError> {
    if uris.is_empty() {
        return Ok(None);
    }

    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let body = AddTracksRequest {
        uris: uris.to_vec(),
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .map_err(ApiError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status(status, body));
    }

    let json = response
        .json::<AddTracksResponse>()
        .await
        .map_err(ApiError::Decode)?;

    Ok(Some(json))
}
