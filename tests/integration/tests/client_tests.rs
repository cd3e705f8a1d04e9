//! HTTP client tests against the mock API
//!
//! Run with: cargo test -p integration-tests --test client_tests

use earthlink_client::HttpRemote;
use earthlink_common::ApiConfig;
use earthlink_core::{
    Coordinate, Credentials, MessageId, NewMessage, Reaction, ReactionEvent, RemoteApi,
    RemoteError, SortOrder, UserId,
};
use earthlink_feed::{sign_in, sign_up};
use integration_tests::{
    clusters_json, unused_base_url, MockApi, FIXTURE_TIMESTAMP, TEST_PASSWORD, TEST_TOKEN,
    TEST_USER_ID, WRONG_PASSWORD,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

fn vancouver() -> Coordinate {
    Coordinate::new(49.28, -123.12).unwrap()
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_messages_near_decodes_clusters() {
    let api = MockApi::start().await.unwrap();
    api.set_nearby(clusters_json(&[&["a", "b"], &["c"]]));
    let remote = api.remote().unwrap();

    let clusters = remote
        .messages_near(vancouver(), 25, SortOrder::Likes)
        .await
        .unwrap();

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].len(), 2);
    let first = &clusters[0].messages()[0];
    assert_eq!(first.id, MessageId::new("a"));
    assert_eq!((first.likes, first.dislikes), (3, 1));
    assert_eq!(first.display_timestamp(), "11/14/2023 10:29 AM");

    let requests = api.requests_to("/getMessagesByRadius");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/getMessagesByRadius/49.28/-123.12/25/1");
}

#[tokio::test]
async fn test_empty_groups_are_dropped() {
    let api = MockApi::start().await.unwrap();
    api.set_nearby(json!([[], clusters_json(&[&["a"]])[0].clone()]));
    let remote = api.remote().unwrap();

    let clusters = remote
        .messages_near(vancouver(), 25, SortOrder::Latest)
        .await
        .unwrap();

    assert_eq!(clusters.len(), 1);
}

#[tokio::test]
async fn test_messages_from_user_with_search() {
    let api = MockApi::start().await.unwrap();
    let remote = api.remote().unwrap();
    let user = UserId::new("user-7");

    let messages = remote
        .messages_from_user(&user, SortOrder::Latest, Some("coffee"))
        .await
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author_id, user);
    assert_eq!(messages[0].content, "about coffee");

    // blank search terms are not sent
    let messages = remote
        .messages_from_user(&user, SortOrder::Latest, Some("  "))
        .await
        .unwrap();
    assert_eq!(messages[0].content, "message own-1");

    let requests = api.requests_to("/getMessagesFromUser");
    assert_eq!(requests[0].path, "/getMessagesFromUser/user-7/0");
}

#[tokio::test]
async fn test_message_count() {
    let api = MockApi::start().await.unwrap();
    api.set_message_count(42);
    let remote = api.remote().unwrap();

    let count = remote.message_count(&UserId::new("user-7")).await.unwrap();

    assert_eq!(count, 42);
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_post_message_body() {
    let api = MockApi::start().await.unwrap();
    let remote = api.remote().unwrap();
    let message = NewMessage::new("hello", vancouver(), UserId::new("user-7")).unwrap();

    let posted = remote.post_message(&message).await.unwrap();

    assert_eq!(posted.id, MessageId::new("msg-new"));
    assert_eq!(posted.status, "Message posted");

    let body = api.requests_to("/message")[0].body.clone().unwrap();
    assert_eq!(body["message_content"], "hello");
    assert_eq!(body["user_uid"], "user-7");
    assert_eq!(body["latitude"], 49.28);
    assert_eq!(body["likes"], 0);
    assert_eq!(body["timestamp"], message.created_at.timestamp_millis());
}

#[tokio::test]
async fn test_change_reaction_body() {
    let api = MockApi::start().await.unwrap();
    let remote = api.remote().unwrap();
    let event = ReactionEvent {
        user_id: UserId::new("user-7"),
        message_id: MessageId::new("m1"),
        reaction: Reaction::Disliked,
        message_timestamp: FIXTURE_TIMESTAMP.parse().unwrap(),
    };

    remote.change_reaction(&event).await.unwrap();

    let body = api.requests_to("/changeReactions")[0].body.clone().unwrap();
    assert_eq!(
        body,
        json!({
            "user_uid": "user-7",
            "message_id": "m1",
            "reaction_type": -1,
            "timestamp": FIXTURE_TIMESTAMP,
        })
    );
}

#[tokio::test]
async fn test_delete_message() {
    let api = MockApi::start().await.unwrap();
    let remote = api.remote().unwrap();

    remote.delete_message(&MessageId::new("m1")).await.unwrap();

    let requests = api.requests_to("/deleteMessage");
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/deleteMessage/m1");
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_sign_in_attaches_token() {
    let api = MockApi::start().await.unwrap();
    let remote = api.remote().unwrap();

    let user = sign_in(&remote, &Credentials::new("me@example.com", TEST_PASSWORD))
        .await
        .unwrap();

    assert_eq!(user, UserId::new(TEST_USER_ID));
    assert_eq!(remote.token().as_deref(), Some(TEST_TOKEN));

    remote.message_count(&user).await.unwrap();
    let requests = api.requests_to("/getNumberMessages");
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some(format!("Bearer {TEST_TOKEN}").as_str())
    );

    let login = &api.requests_to("/login")[0];
    assert!(login.authorization.is_none());
    assert_eq!(login.body.as_ref().unwrap()["email"], "me@example.com");
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let api = MockApi::start().await.unwrap();
    let remote = api.remote().unwrap();

    let err = remote
        .login(&Credentials::new("me@example.com", WRONG_PASSWORD))
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::Unauthorized));
    assert!(err.is_application());
    assert!(remote.token().is_none());
}

#[tokio::test]
async fn test_sign_up() {
    let api = MockApi::start().await.unwrap();
    let remote = api.remote().unwrap();

    let user = sign_up(&remote, &Credentials::new("new@example.com", TEST_PASSWORD))
        .await
        .unwrap();

    assert_eq!(user, UserId::new("user-new"));
}

// ============================================================================
// Failure classification
// ============================================================================

#[tokio::test]
async fn test_non_2xx_is_application_error() {
    let api = MockApi::start().await.unwrap();
    api.fail_with(Some(StatusCode::INTERNAL_SERVER_ERROR));
    let remote = api.remote().unwrap();

    let err = remote
        .messages_near(vancouver(), 25, SortOrder::Latest)
        .await
        .unwrap_err();

    assert!(err.is_application());
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, RemoteError::Http { ref body, .. } if body == "injected failure"));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let api = MockApi::start().await.unwrap();
    api.set_nearby(json!({ "unexpected": true }));
    let remote = api.remote().unwrap();

    let err = remote
        .messages_near(vancouver(), 25, SortOrder::Latest)
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let remote = HttpRemote::new(&ApiConfig {
        base_url: unused_base_url().await.unwrap(),
        request_timeout: None,
    })
    .unwrap();

    let err = remote
        .messages_near(vancouver(), 25, SortOrder::Latest)
        .await
        .unwrap_err();

    assert!(err.is_transport());
}
