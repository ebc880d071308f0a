use reqwest::Client;

use crate::{config, spotify::ApiError, types::UserProfile};

/// Retrieves the profile of the authenticated user.
///
/// The profile id anchors every playlist operation of a run, so the caller
/// treats a failure here as fatal.
pub async fn get(token: &str) -> Result<UserProfile, ApiError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

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

    response
        .json::<UserProfile>()
        .await
        .map_err(ApiError::Decode)
}
