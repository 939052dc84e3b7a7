//! Integration tests for authentication flows.
//!
//! These tests verify the pre-flight credential exchanges (JWT login, nonce
//! fetch) and the single-flight refresh path against a mock server.

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wordpress_api::{AuthStrategy, Error, WordPress};

fn post_body(id: u64) -> serde_json::Value {
    serde_json::json!({"id": id, "slug": "hello"})
}

fn rejected_body() -> serde_json::Value {
    serde_json::json!({
        "code": "jwt_auth_invalid_token",
        "message": "Expired token",
        "data": {"status": 401}
    })
}

// ============================================================================
// JWT Login Tests
// ============================================================================

#[tokio::test]
async fn test_jwt_login_exchanges_once_then_sends_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/jwt-auth/v1/token"))
        .and(body_json(
            serde_json::json!({"username": "admin", "password": "pw"}),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "jwt-1"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/1"))
        .and(header("Authorization", "Bearer jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body(1)))
        .expect(2)
        .mount(&server)
        .await;

    let wp = WordPress::for_site(server.uri(), AuthStrategy::jwt_login("admin", "pw")).unwrap();

    // Two calls, one login: the token is cached after the pre-flight.
    wp.posts().get(1).await.unwrap();
    wp.posts().get(1).await.unwrap();
}

#[tokio::test]
async fn test_jwt_login_failure_surfaces_as_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/jwt-auth/v1/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": "jwt_auth_failed",
            "message": "Invalid credentials.",
            "data": {"status": 403}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let wp = WordPress::for_site(server.uri(), AuthStrategy::jwt_login("admin", "bad")).unwrap();
    let error = wp.posts().get(1).await.unwrap_err();

    match error {
        Error::AuthenticationRejected { status, message, .. } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Invalid credentials.");
        }
        other => panic!("expected AuthenticationRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_token_is_refreshed_exactly_once() {
    let server = MockServer::start().await;

    // First login hands out a token the API has already expired.
    Mock::given(method("POST"))
        .and(path("/wp-json/jwt-auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "stale"})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/jwt-auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "fresh"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/1"))
        .and(header("Authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(rejected_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/1"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let wp = WordPress::for_site(server.uri(), AuthStrategy::jwt_login("admin", "pw")).unwrap();
    let post = wp.posts().get(1).await.unwrap();
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn test_persistent_rejection_fails_after_one_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/jwt-auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "t"})),
        )
        .expect(2)
        .mount(&server)
        .await;
    // The API rejects the token no matter how fresh it is: exactly the
    // initial attempt plus the one post-refresh retry.
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(rejected_body()))
        .expect(2)
        .mount(&server)
        .await;

    let wp = WordPress::for_site(server.uri(), AuthStrategy::jwt_login("admin", "pw")).unwrap();
    let error = wp.posts().get(1).await.unwrap_err();
    assert!(matches!(
        error,
        Error::AuthenticationRejected { status: 401, .. }
    ));
}

#[tokio::test]
async fn test_concurrent_rejections_share_one_refresh() {
    let server = MockServer::start().await;

    // One initial login plus exactly one refresh, no matter how many
    // requests observe the stale token.
    Mock::given(method("POST"))
        .and(path("/wp-json/jwt-auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "stale"})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/jwt-auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "fresh"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(rejected_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body(1)))
        .expect(2)
        .mount(&server)
        .await;

    let wp = WordPress::for_site(server.uri(), AuthStrategy::jwt_login("admin", "pw")).unwrap();
    let posts = wp.posts();
    let (a, b) = tokio::join!(posts.get(1), posts.get(1));
    assert!(a.is_ok());
    assert!(b.is_ok());
}

// ============================================================================
// Cookie + Nonce Tests
// ============================================================================

#[tokio::test]
async fn test_nonce_fetched_with_cookies_then_injected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-admin/admin-ajax.php"))
        .and(query_param("action", "rest-nonce"))
        .and(header("Cookie", "wordpress_logged_in=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a1b2c3d4e5"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/1"))
        .and(header("X-WP-Nonce", "a1b2c3d4e5"))
        .and(header("Cookie", "wordpress_logged_in=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthStrategy::cookie_nonce(
        None,
        vec![("wordpress_logged_in".to_string(), "abc".to_string())],
    );
    let wp = WordPress::for_site(server.uri(), auth).unwrap();
    wp.posts().get(1).await.unwrap();
}

#[tokio::test]
async fn test_zero_nonce_response_is_rejected() {
    let server = MockServer::start().await;
    // admin-ajax.php answers "0" for unauthenticated sessions.
    Mock::given(method("GET"))
        .and(path("/wp-admin/admin-ajax.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("0"))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthStrategy::cookie_nonce(
        None,
        vec![("wordpress_logged_in".to_string(), "expired".to_string())],
    );
    let wp = WordPress::for_site(server.uri(), auth).unwrap();
    let error = wp.posts().get(1).await.unwrap_err();
    assert!(matches!(error, Error::AuthenticationRejected { .. }));
}

#[tokio::test]
async fn test_supplied_nonce_skips_preflight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts/1"))
        .and(header("X-WP-Nonce", "known-nonce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthStrategy::cookie_nonce(
        Some("known-nonce".to_string()),
        vec![("wordpress_logged_in".to_string(), "abc".to_string())],
    );
    let wp = WordPress::for_site(server.uri(), auth).unwrap();
    wp.posts().get(1).await.unwrap();
    // No admin-ajax.php mock is mounted; a pre-flight would have failed.
}
