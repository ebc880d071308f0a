//! Configuration management for the folder-to-playlist CLI.
//!
//! Two layers of configuration exist. The application credentials
//! (`client_id`, `client_secret`, `redirect_uri`) live in a required JSON
//! config file; a run cannot proceed without them. Endpoint URLs and the
//! OAuth scope come from environment variables with production defaults,
//! optionally seeded from a `.env` file in the local data directory.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Application credentials as registered on the Spotify developer dashboard.
///
/// Loaded from `config.json` in the local data directory, falling back to
/// `./config.json` in the working directory. A missing or unparsable file is
/// reported to the caller; per the error model this is a fatal condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Config {
    /// Loads the JSON config file from the data directory or the working
    /// directory, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the missing path when no config file
    /// exists, or the serde error when the file cannot be parsed.
    pub async fn load() -> Result<Self, String> {
        let path = Self::config_path();
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(_) => async_fs::read_to_string("config.json")
                .await
                .map_err(|_| format!("config file not found at {}", path.display()))?,
        };

        serde_json::from_str(&content).map_err(|e| e.to_string())
    }

    fn config_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spofolcli/config.json");
        path
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is optional; endpoint getters fall back to production defaults
/// when neither the file nor the process environment provides a value.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spofolcli/.env`
/// - macOS: `~/Library/Application Support/spofolcli/.env`
/// - Windows: `%LOCALAPPDATA%/spofolcli/.env`
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spofolcli/.env");
    let _ = dotenv::from_path(path);
}

/// Returns the Spotify Web API base URL.
///
/// Overridable through the `SPOTIFY_API_URL` environment variable.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Overridable through the `SPOTIFY_API_TOKEN_URL` environment variable.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify OAuth authorization URL shown to the user before the
/// interactive code prompt.
///
/// Overridable through the `SPOTIFY_API_AUTH_URL` environment variable.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the OAuth scope requested during authorization.
///
/// Overridable through the `SPOTIFY_API_AUTH_SCOPE` environment variable.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE")
        .unwrap_or_else(|_| "playlist-read-private playlist-modify-public".to_string())
}
