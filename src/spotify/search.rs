use reqwest::Client;
use tracing::debug;

use crate::{
    config,
    error::Error,
    management::TokenManager,
    types::{SearchQuery, SearchResults},
    utils,
};

/// Issues one catalog search against the Spotify Web API.
///
/// Obtains a valid bearer token (refreshing the on-disk cache if needed),
/// builds the request from `query`, and decodes the response. The required
/// parameters `q` and `type` are always present; `market`, `limit`,
/// `offset`, and `include_external` are appended only when set; an unset
/// optional field must not appear in the request at all, since its absence
/// drives the remote service's defaulting behavior.
///
/// # Errors
///
/// Token acquisition failures propagate with their own kinds
/// ([`Error::TokenCache`], [`Error::Authorization`]). A transport failure
/// or non-2xx status is [`Error::SearchTransport`]; an undecodable body is
/// [`Error::SearchDecode`]. The call either fully succeeds or fully fails.
pub async fn search(query: &SearchQuery) -> Result<SearchResults, Error> {
    let token = TokenManager::new().get_valid_token().await?;

    let mut params: Vec<(&str, String)> = vec![
        ("q", query.text.clone()),
        ("type", utils::join_kinds(&query.kinds)),
    ];
    if let Some(market) = &query.market {
        params.push(("market", market.clone()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    if let Some(offset) = query.offset {
        params.push(("offset", offset.to_string()));
    }
    if let Some(include_external) = &query.include_external {
        params.push(("include_external", include_external.clone()));
    }

    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    debug!(q = %query.text, types = %utils::join_kinds(&query.kinds), "dispatching search");

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(&token.access_token)
        .query(&params)
        .send()
        .await
        .map_err(Error::SearchTransport)?
        .error_for_status()
        .map_err(Error::SearchTransport)?;

    response
        .json::<SearchResults>()
        .await
        .map_err(Error::SearchDecode)
}
