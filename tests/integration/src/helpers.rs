//! Test helpers for integration tests
//!
//! Provides an in-process mock of the EarthLink API that records every
//! request and can be told to fail.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use earthlink_client::HttpRemote;
use earthlink_common::ApiConfig;
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{message_json, TEST_TOKEN, TEST_USER_ID, WRONG_PASSWORD};

/// A request seen by the mock API
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<RecordedRequest>>,
    nearby: Mutex<Value>,
    failure: Mutex<Option<StatusCode>>,
    message_count: Mutex<u64>,
}

impl MockState {
    /// Record the request; returns the injected failure, if any
    fn record(
        &self,
        method: Method,
        uri: &Uri,
        headers: &HeaderMap,
        body: Option<Value>,
    ) -> Option<Response> {
        self.requests.lock().push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            authorization: headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
        self.failure
            .lock()
            .map(|status| (status, "injected failure").into_response())
    }
}

/// Mock EarthLink API server
pub struct MockApi {
    pub addr: SocketAddr,
    state: Arc<MockState>,
    _handle: JoinHandle<()>,
}

impl MockApi {
    /// Start the mock on an ephemeral port
    pub async fn start() -> Result<Self> {
        let state = Arc::new(MockState {
            nearby: Mutex::new(json!([])),
            ..MockState::default()
        });

        let app = Router::new()
            .route(
                "/getMessagesByRadius/:lat/:lng/:max/:sort",
                get(messages_by_radius),
            )
            .route("/getMessagesFromUser/:uid/:sort", get(messages_from_user))
            .route("/getNumberMessages/:uid", get(number_messages))
            .route("/deleteMessage/:id", delete(delete_message))
            .route("/message", post(post_message))
            .route("/changeReactions", post(change_reactions))
            .route("/login", post(login))
            .route("/signup", post(signup))
            .route("/ping", post(ping))
            .with_state(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            request_timeout: Some(Duration::from_secs(5)),
        }
    }

    /// Client pointed at this mock
    pub fn remote(&self) -> Result<HttpRemote> {
        Ok(HttpRemote::new(&self.api_config())?)
    }

    /// Body returned by the next `getMessagesByRadius` calls
    pub fn set_nearby(&self, body: Value) {
        *self.state.nearby.lock() = body;
    }

    pub fn set_message_count(&self, count: u64) {
        *self.state.message_count.lock() = count;
    }

    /// Answer every request with `status` until cleared with `None`
    pub fn fail_with(&self, status: Option<StatusCode>) {
        *self.state.failure.lock() = status;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// Recorded requests whose path starts with `prefix`
    pub fn requests_to(&self, prefix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with(prefix))
            .collect()
    }
}

/// An address nothing listens on
pub async fn unused_base_url() -> Result<String> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

async fn messages_by_radius(
    State(state): State<Arc<MockState>>,
    Path((_lat, _lng, _max, _sort)): Path<(f64, f64, u32, u8)>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = state.record(method, &uri, &headers, None) {
        return failure;
    }
    Json(state.nearby.lock().clone()).into_response()
}

#[derive(Deserialize)]
struct SearchQuery {
    search_term: Option<String>,
}

async fn messages_from_user(
    State(state): State<Arc<MockState>>,
    Path((uid, _sort)): Path<(String, u8)>,
    Query(query): Query<SearchQuery>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = state.record(method, &uri, &headers, None) {
        return failure;
    }
    let mut message = message_json("own-1", 0, 0);
    message["user_uid"] = json!(uid);
    if let Some(term) = query.search_term {
        message["message_content"] = json!(format!("about {term}"));
    }
    Json(json!([message])).into_response()
}

async fn number_messages(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = state.record(method, &uri, &headers, None) {
        return failure;
    }
    let count = *state.message_count.lock();
    Json(json!({ "number_messages": count })).into_response()
}

async fn delete_message(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = state.record(method, &uri, &headers, None) {
        return failure;
    }
    StatusCode::OK.into_response()
}

async fn post_message(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = state.record(method, &uri, &headers, Some(body)) {
        return failure;
    }
    Json(json!({ "message": "Message posted", "message_id": "msg-new" })).into_response()
}

async fn change_reactions(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = state.record(method, &uri, &headers, Some(body)) {
        return failure;
    }
    Json(json!({ "message": "Reaction updated" })).into_response()
}

async fn login(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let wrong = body["password"] == WRONG_PASSWORD;
    if let Some(failure) = state.record(method, &uri, &headers, Some(body)) {
        return failure;
    }
    if wrong {
        return (StatusCode::UNAUTHORIZED, "bad credentials").into_response();
    }
    Json(json!({ "token": TEST_TOKEN })).into_response()
}

async fn signup(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = state.record(method, &uri, &headers, Some(body)) {
        return failure;
    }
    Json(json!({ "user_id": "user-new" })).into_response()
}

async fn ping(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {TEST_TOKEN}").as_str());
    if let Some(failure) = state.record(method, &uri, &headers, None) {
        return failure;
    }
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({ "userID": TEST_USER_ID })).into_response()
}
