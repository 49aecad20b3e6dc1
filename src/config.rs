//! Configuration management for the Spotify search TUI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials,
//! endpoint URLs, and the token-cache location.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use dotenv;

use crate::error::Error;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `sposearch/.env`. This allows users to store
/// credentials without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sposearch/.env`
/// - macOS: `~/Library/Application Support/sposearch/.env`
/// - Windows: `%LOCALAPPDATA%/sposearch/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded. A
/// missing `.env` file is not an error; credentials may come from real
/// environment variables instead; [`validate`] decides whether the result
/// is complete.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sposearch/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // The process environment alone may be fully sufficient.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Verifies that every required configuration value is present.
///
/// Called once at startup, before the terminal enters raw mode, so a
/// missing credential becomes a single readable error instead of a panic
/// mid-session.
///
/// # Errors
///
/// Returns [`Error::Config`] naming the first missing variable.
pub fn validate() -> Result<(), Error> {
    for var in [
        "SPOTIFY_API_AUTH_CLIENT_ID",
        "SPOTIFY_API_AUTH_CLIENT_SECRET",
        "SPOTIFY_API_TOKEN_URL",
        "SPOTIFY_API_URL",
    ] {
        if env::var(var).map(|v| v.is_empty()).unwrap_or(true) {
            return Err(Error::Config(format!(
                "missing required environment variable {var}"
            )));
        }
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the variable is not set. [`validate`] makes this unreachable
/// in normal operation.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Panics
///
/// Panics if the variable is not set. [`validate`] makes this unreachable
/// in normal operation.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable containing
/// the URL the client-credentials grant is POSTed to. Production value:
/// `https://accounts.spotify.com/api/token`. Tests point this at a local
/// stub server.
///
/// # Panics
///
/// Panics if the variable is not set. [`validate`] makes this unreachable
/// in normal operation.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable containing the base
/// URL for Web API endpoints. Production value: `https://api.spotify.com/v1`.
///
/// # Panics
///
/// Panics if the variable is not set. [`validate`] makes this unreachable
/// in normal operation.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the path of the single-slot token cache file.
///
/// Honors the optional `SPOSEARCH_TOKEN_CACHE` override; otherwise defaults
/// to `sposearch/cache/token.json` inside the platform local data directory.
pub fn token_cache_path() -> PathBuf {
    if let Ok(path) = env::var("SPOSEARCH_TOKEN_CACHE") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sposearch/cache/token.json");
    path
}
