use std::{
    io::{self, Write},
    path::PathBuf,
};

use chrono::Utc;
use reqwest::Client;

use crate::{
    config::{self, Config},
    error, info,
    management::TokenManager,
    spotify::ApiError,
    success,
    types::{Token, TokenResponse},
};

/// Obtains a fresh bearer token and persists it, replacing whatever the
/// cache held before.
///
/// The authorization code is sourced from a local override file if present,
/// else from an interactive prompt (the authorization URL is printed first
/// so the user can complete the consent step). Any failure here is fatal:
/// the code is single-use, so there is nothing sensible to retry with.
///
/// # Returns
///
/// The new access token, ready to be sent as a bearer header.
pub async fn regenerate(config: &Config) -> String {
    let code = match read_code_file().await {
        Some(code) => code,
        None => {
            info!("Authorize in your browser, then paste the code below:");
            info!("{}", authorize_url(config));
            match prompt_auth_code() {
                Ok(code) => code,
                Err(e) => error!("Failed to read authorization code: {}", e),
            }
        }
    };

    let code = code.trim();
    if code.is_empty() {
        error!("Authorization code is empty");
    }

    let token = match exchange_code(config, code).await {
        Ok(token) => token,
        Err(e) => error!("Token exchange failed: {}", e),
    };

    let token_manager = TokenManager::new(token);
    if let Err(e) = token_manager.persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!("Token generated and saved");
    token_manager.current_token().access_token.clone()
}

/// Exchanges an authorization code for a bearer token.
///
/// One form-encoded POST against the token endpoint with client-id/secret
/// basic auth. Single attempt; the caller decides what a failure means.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, ApiError> {
    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(ApiError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status(status, body));
    }

    let grant = response
        .json::<TokenResponse>()
        .await
        .map_err(ApiError::Decode)?;

    Ok(Token {
        access_token: grant.access_token,
        token_type: grant.token_type,
        scope: grant.scope,
        expires_in: grant.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// The URL the user visits to grant access and receive an authorization code.
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = config::spotify_apiauth_url(),
        client_id = config.client_id,
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        scope = urlencoding::encode(&config::spotify_scope()),
    )
}

// First line of the optional code override file, if it exists.
async fn read_code_file() -> Option<String> {
    let content = async_fs::read_to_string(code_path()).await.ok()?;
    content.lines().next().map(|line| line.to_string())
}

fn prompt_auth_code() -> io::Result<String> {
    print!("Enter the auth code: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn code_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spofolcli/code");
    path
}
