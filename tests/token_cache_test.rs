use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sposearch::error::Error;
use sposearch::management::TokenManager;
use sposearch::types::Token;

// Environment variables are process-global; every test takes this lock
// before touching them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn set_var(key: &str, value: &str) {
    // Callers hold ENV_LOCK
    unsafe { std::env::set_var(key, value) };
}

fn configure(token_url: &str) {
    set_var("SPOTIFY_API_AUTH_CLIENT_ID", "test-client-id");
    set_var("SPOTIFY_API_AUTH_CLIENT_SECRET", "test-client-secret");
    set_var("SPOTIFY_API_TOKEN_URL", token_url);
}

fn cached_token(expiration: u64) -> Token {
    Token {
        access_token: "cached-access-token".to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        expiration,
    }
}

fn write_token(path: &Path, token: &Token) {
    std::fs::write(path, serde_json::to_string_pretty(token).unwrap()).unwrap();
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}

fn exchange_body() -> serde_json::Value {
    json!({
        "access_token": "fresh-access-token",
        "token_type": "Bearer",
        "expires_in": 3600
    })
}

#[tokio::test]
async fn valid_cached_token_is_returned_without_network() {
    let _guard = lock_env();
    let server = MockServer::start().await;
    configure(&format!("{}/api/token", server.uri()));

    // Any request reaching the server fails the test on drop
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_body()))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token.json");
    let stored = cached_token(now() + 3600);
    write_token(&cache, &stored);

    let manager = TokenManager::with_path(cache.clone());
    let token = manager.get_valid_token().await.unwrap();

    assert_eq!(token, stored);
}

#[tokio::test]
async fn repeated_calls_with_valid_cache_are_bit_identical() {
    let _guard = lock_env();
    let server = MockServer::start().await;
    configure(&format!("{}/api/token", server.uri()));

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_body()))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token.json");
    write_token(&cache, &cached_token(now() + 3600));
    let contents_before = std::fs::read_to_string(&cache).unwrap();

    let manager = TokenManager::with_path(cache.clone());
    let first = manager.get_valid_token().await.unwrap();
    let second = manager.get_valid_token().await.unwrap();

    assert_eq!(first, second);
    // The cache slot was not rewritten either
    assert_eq!(std::fs::read_to_string(&cache).unwrap(), contents_before);
}

#[tokio::test]
async fn expired_token_triggers_exactly_one_exchange_and_write() {
    let _guard = lock_env();
    let server = MockServer::start().await;
    configure(&format!("{}/api/token", server.uri()));

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token.json");
    write_token(&cache, &cached_token(now() - 1));

    let before = now();
    let manager = TokenManager::with_path(cache.clone());
    let token = manager.get_valid_token().await.unwrap();
    let after = now();

    assert_eq!(token.access_token, "fresh-access-token");
    // expiration = now + expires_in - 15, for whichever "now" the exchange saw
    assert!(token.expiration >= before + 3600 - 15);
    assert!(token.expiration <= after + 3600 - 15);

    // The slot was overwritten and round-trips to exactly the returned token
    let persisted: Token =
        serde_json::from_str(&std::fs::read_to_string(&cache).unwrap()).unwrap();
    assert_eq!(persisted, token);
}

#[tokio::test]
async fn missing_cache_file_exchanges_and_creates_the_slot() {
    let _guard = lock_env();
    let server = MockServer::start().await;
    configure(&format!("{}/api/token", server.uri()));

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache/token.json");
    assert!(!cache.exists());

    let manager = TokenManager::with_path(cache.clone());
    let token = manager.get_valid_token().await.unwrap();

    assert_eq!(token.access_token, "fresh-access-token");
    assert!(cache.exists());
}

#[tokio::test]
async fn malformed_cache_is_a_hard_error_and_no_exchange_happens() {
    let _guard = lock_env();
    let server = MockServer::start().await;
    configure(&format!("{}/api/token", server.uri()));

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_body()))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token.json");
    std::fs::write(&cache, "this is not a token {{").unwrap();

    let manager = TokenManager::with_path(cache.clone());
    let err = manager.get_valid_token().await.unwrap_err();

    assert!(matches!(err, Error::TokenCache { .. }));
    // The malformed file is left in place for the user to inspect
    assert_eq!(
        std::fs::read_to_string(&cache).unwrap(),
        "this is not a token {{"
    );
}

#[tokio::test]
async fn failed_exchange_surfaces_and_leaves_the_cache_untouched() {
    let _guard = lock_env();
    let server = MockServer::start().await;
    configure(&format!("{}/api/token", server.uri()));

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token.json");
    let stale = cached_token(now() - 100);
    write_token(&cache, &stale);
    let contents_before = std::fs::read_to_string(&cache).unwrap();

    let manager = TokenManager::with_path(cache.clone());
    let err = manager.get_valid_token().await.unwrap_err();

    assert!(matches!(err, Error::Authorization(_)));
    assert_eq!(std::fs::read_to_string(&cache).unwrap(), contents_before);
}

#[tokio::test]
async fn exchange_sends_form_encoded_client_credentials() {
    let _guard = lock_env();
    let server = MockServer::start().await;
    configure(&format!("{}/api/token", server.uri()));

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded",
        ))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client-id"))
        .and(body_string_contains("client_secret=test-client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exchange_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let manager = TokenManager::with_path(dir.path().join("token.json"));
    manager.get_valid_token().await.unwrap();
}
