use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::{
    config,
    error::Error,
    types::{Token, TokenResponse},
};

/// Subtracted from the upstream `expires_in` so a token is refreshed
/// slightly before Spotify would reject it.
const EXPIRY_MARGIN_SECS: u64 = 15;

/// Performs one OAuth 2.0 client-credentials exchange.
///
/// POSTs a form-encoded body `{grant_type, client_id, client_secret}` to
/// the configured token endpoint and converts the response into a
/// [`Token`] with an absolute expiration of
/// `now + expires_in - EXPIRY_MARGIN_SECS`.
///
/// # Errors
///
/// Any transport failure, non-2xx status, or undecodable body is surfaced
/// as [`Error::Authorization`]. There is no retry.
pub async fn request_token() -> Result<Token, Error> {
    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "client_credentials".to_string()),
            ("client_id", config::spotify_client_id()),
            ("client_secret", config::spotify_client_secret()),
        ])
        .send()
        .await
        .map_err(|e| Error::Authorization(e.to_string()))?
        .error_for_status()
        .map_err(|e| Error::Authorization(e.to_string()))?;

    let raw: TokenResponse = response
        .json()
        .await
        .map_err(|e| Error::Authorization(e.to_string()))?;

    let now = Utc::now().timestamp() as u64;
    debug!(expires_in = raw.expires_in, "obtained fresh access token");

    Ok(Token {
        access_token: raw.access_token,
        token_type: raw.token_type,
        expires_in: raw.expires_in,
        expiration: now + raw.expires_in.saturating_sub(EXPIRY_MARGIN_SECS),
    })
}
