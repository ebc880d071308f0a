use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::types::Token;

/// Durable store for the bearer token, backed by a single JSON file in the
/// local data directory. The token is never mutated in place; regeneration
/// replaces the file wholesale.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Reads the cached token. A missing or corrupt store yields `None`,
    /// never an error; callers treat absent the same as expired.
    pub async fn load() -> Option<Self> {
        Self::load_from(&Self::token_path()).await
    }

    pub async fn load_from(path: &Path) -> Option<Self> {
        let content = async_fs::read_to_string(path).await.ok()?;
        let token: Token = serde_json::from_str(&content).ok()?;
        Some(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        self.persist_to(&Self::token_path()).await
    }

    pub async fn persist_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// The access token, as long as it is still within its lifetime.
    pub fn valid_access_token(&self) -> Option<&str> {
        let now = Utc::now().timestamp() as u64;
        if self.token.is_expired_at(now) {
            None
        } else {
            Some(&self.token.access_token)
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spofolcli/cache/token.json");
        path
    }
}
