use reqwest::Client;

use crate::{
    config,
    spotify::ApiError,
    types::{SearchResponse, TrackMatch},
};

/// Searches the catalog for a track matching the query.
///
/// At most 10 candidates are requested and only the first result counts;
/// `Ok(None)` means the catalog had nothing for this query, which the
/// pipeline records as a miss and moves on from.
pub async fn track(token: &str, query: &str) -> Result<Option<TrackMatch>, ApiError> {
    let api_url = format!(
        "{uri}/search?q={query}&type=track&limit=10",
        uri = &config::spotify_apiurl(),
        query = urlencoding::encode(query)
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
        .json::<SearchResponse>()
        .await
        .map_err(ApiError::Decode)?;

    let hit = json.tracks.items.into_iter().next().map(|track| TrackMatch {
        query: query.to_string(),
        uri: track.uri,
        title: track.name,
        artist: track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
    });

    Ok(hit)
}
