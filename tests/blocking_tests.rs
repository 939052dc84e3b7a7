//! Integration tests for the blocking client shell.
//!
//! The mock server runs on its own multi-thread runtime while the blocking
//! client drives its private current-thread runtime, mirroring how a
//! synchronous application would use it.

use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wordpress_api::blocking::WordPress;
use wordpress_api::{AuthStrategy, Error, PostParams, PostStatus, QueryBuilder};

#[test]
fn test_blocking_get_matches_async_semantics() {
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let server = server_rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42,
                "status": "publish"
            })))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let wp = WordPress::for_site(server.uri(), AuthStrategy::None).unwrap();
    let post = wp.posts().get(42).unwrap();
    assert_eq!(post.id, 42);
    assert_eq!(post.status, Some(PostStatus::Publish));
}

#[test]
fn test_blocking_create_and_list() {
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let server = server_rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/posts"))
            .and(body_json(serde_json::json!({
                "title": "T",
                "content": "C",
                "status": "draft"
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 9})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts"))
            .and(query_param("per_page", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-WP-Total", "1")
                    .set_body_json(serde_json::json!([{"id": 9}])),
            )
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let wp = WordPress::for_site(server.uri(), AuthStrategy::None).unwrap();

    let created = wp.posts().create(&PostParams::draft("T", "C")).unwrap();
    assert_eq!(created.id, 9);

    let page = wp
        .posts()
        .list(QueryBuilder::new().per_page(5).build().unwrap())
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, Some(1));
}

#[test]
fn test_blocking_errors_classify_identically() {
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let server = server_rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "code": "rest_post_invalid_id",
                "message": "Invalid post ID.",
                "data": {"status": 404}
            })))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let wp = WordPress::for_site(server.uri(), AuthStrategy::None).unwrap();
    let error = wp.posts().get(999).unwrap_err();
    assert!(matches!(error, Error::NotFound { .. }));
    assert_eq!(error.kind(), "not_found");
}
