use std::{io, path::PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{config, error::Error, spotify, types::Token};

/// Owner of the single-slot on-disk token cache.
///
/// Every authorization attempt re-reads the cache file, returns the cached
/// token while it is still valid, and otherwise performs one
/// client-credentials exchange and overwrites the slot with the fresh
/// token. There is exactly one file read and at most one file write per
/// call, and no retry: a failed exchange fails the caller's search outright.
pub struct TokenManager {
    cache_path: PathBuf,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager {
            cache_path: config::token_cache_path(),
        }
    }

    /// Manager over an explicit cache location instead of the configured one.
    pub fn with_path(cache_path: PathBuf) -> Self {
        TokenManager { cache_path }
    }

    /// Returns a bearer token that is valid at the time of the call.
    ///
    /// A cached token with `expiration >= now` is returned unchanged with
    /// zero network calls. An expired or absent cache triggers one exchange;
    /// the new token is persisted before being returned. A malformed cache
    /// file is a hard [`Error::TokenCache`], never silently replaced,
    /// so the user can inspect or delete it.
    ///
    /// A failed cache *write* after a successful exchange does not
    /// invalidate the freshly obtained token; it is logged and the token is
    /// returned anyway.
    pub async fn get_valid_token(&self) -> Result<Token, Error> {
        let now = Utc::now().timestamp() as u64;

        if let Some(cached) = self.load_cached().await? {
            if cached.is_valid(now) {
                debug!(
                    remaining = cached.expiration - now,
                    "using cached access token"
                );
                return Ok(cached);
            }
            debug!("cached access token expired, requesting a new one");
        }

        let token = spotify::auth::request_token().await?;

        if let Err(e) = self.persist(&token).await {
            warn!(error = %e, path = %self.cache_path.display(), "failed to persist token cache");
        }

        Ok(token)
    }

    async fn load_cached(&self) -> Result<Option<Token>, Error> {
        let content = match async_fs::read_to_string(&self.cache_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::TokenCache {
                    path: self.cache_path.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let token: Token = serde_json::from_str(&content).map_err(|e| Error::TokenCache {
            path: self.cache_path.clone(),
            reason: e.to_string(),
        })?;

        Ok(Some(token))
    }

    /// Overwrites the cache slot with `token` (whole file, pretty JSON).
    pub async fn persist(&self, token: &Token) -> Result<(), String> {
        if let Some(parent) = self.cache_path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(&self.cache_path, json)
            .await
            .map_err(|e| e.to_string())
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}
