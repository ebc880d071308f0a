//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! folder-to-playlist pipeline: token exchange, profile lookup, playlist
//! management, and track search. It is the only place in the crate that
//! performs HTTP communication.
//!
//! ## Architecture
//!
//! Each submodule handles one domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization-code exchange)
//!     ├── Profile (current user)
//!     ├── Playlist Operations (list, create, add tracks)
//!     └── Track Search (first-result matching)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Request Model
//!
//! Every call is a single awaited HTTP request with no internal retry. A
//! non-2xx response or transport failure surfaces as an [`ApiError`] so the
//! pipeline can decide whether to abort the run; no failure is ever folded
//! into an empty success.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - authorization-code exchange (basic auth)
//! - `GET /me` - current user profile
//! - `GET /users/{user_id}/playlists` - playlist listing for reuse checks
//! - `POST /users/{user_id}/playlists` - playlist creation
//! - `GET /search` - track search, limited to 10 candidates
//! - `POST /playlists/{playlist_id}/tracks` - batched track addition
//!
//! ## Authentication Strategy
//!
//! The token exchange uses the classic authorization-code grant with
//! client-id/secret basic auth. The code is single-use: a failed exchange is
//! not retried, since a retry would need a fresh code from the user.

use reqwest::StatusCode;

pub mod auth;
pub mod playlist;
pub mod profile;
pub mod search;

/// Failure of a single Web API call.
///
/// Callers get the reason instead of a bare absent value: the pipeline
/// treats some of these as fatal (profile, playlist list/create, batched
/// add) and others as per-file recoverable (search).
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Transport(reqwest::Error),
    /// The service answered with a non-2xx status; the body is kept for the
    /// diagnostic.
    Status(StatusCode, String),
    /// The response body did not decode into the expected shape.
    Decode(reqwest::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport error: {}", e),
            ApiError::Status(status, body) => {
                if body.is_empty() {
                    write!(f, "HTTP {}", status)
                } else {
                    write!(f, "HTTP {}: {}", status, body)
                }
            }
            ApiError::Decode(e) => write!(f, "malformed response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
