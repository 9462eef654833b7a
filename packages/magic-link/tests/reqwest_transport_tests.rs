//! ReqwestTransport against a throwaway local backend.

mod common;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use common::{complete_fields, error_param, submission, RecordingNavigator};
use magic_link::{
    MagicLinkConfig, MagicLinkFormHandler, MagicLinkRequest, MagicLinkTransport, ReqwestTransport,
    SubmitOutcome, Url, Variant,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Received {
    content_type: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct Backend {
    received: Arc<Mutex<Vec<Received>>>,
    status: StatusCode,
    reply: &'static str,
}

async fn send_magic_link(
    State(backend): State<Backend>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    backend.received.lock().unwrap().push(Received {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    });
    (backend.status, backend.reply)
}

/// Start a backend answering every POST with `status` and `reply`.
/// Returns the URL of a page whose send endpoint is the backend route.
async fn spawn_backend(status: StatusCode, reply: &'static str) -> (Url, Arc<Mutex<Vec<Received>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let backend = Backend {
        received: received.clone(),
        status,
        reply,
    };

    let app = Router::new()
        .route("/ext/auth/send-magic-link", post(send_magic_link))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let page = Url::parse(&format!("http://{}/ext/auth/ui/signin", addr)).unwrap();
    (page, received)
}

fn request() -> MagicLinkRequest {
    MagicLinkRequest::from_fields(&complete_fields(), "builtin::local_magic_link").unwrap()
}

#[tokio::test]
async fn test_posts_json_with_content_type() {
    let (page, received) = spawn_backend(StatusCode::OK, r#"{"ok":true}"#).await;
    let config = MagicLinkConfig::from_page_url(&page).unwrap();

    let response = ReqwestTransport::new()
        .post_json(config.send_url(), &request())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.status_text, "OK");
    assert_eq!(response.body, r#"{"ok":true}"#);

    let received = received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(received[0].body["callbackUrl"], "https://app.example.com/auth/callback");
    assert_eq!(received[0].body["provider"], "builtin::local_magic_link");
}

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let (page, _) = spawn_backend(StatusCode::BAD_REQUEST, "unknown provider").await;
    let config = MagicLinkConfig::from_page_url(&page).unwrap();

    let response = ReqwestTransport::new()
        .post_json(config.send_url(), &request())
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.status, 400);
    assert_eq!(response.status_text, "Bad Request");
    assert_eq!(response.body, "unknown provider");
}

#[tokio::test]
async fn test_status_text_is_the_reason_phrase_sent() {
    async fn quota_exceeded() -> Response {
        let mut response = (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response();
        response
            .extensions_mut()
            .insert(hyper::ext::ReasonPhrase::from_static(b"Magic Link Quota Exceeded"));
        response
    }

    let app = Router::new().route("/send-magic-link", post(quota_exceeded));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = Url::parse(&format!("http://{}/send-magic-link", addr)).unwrap();
    let response = ReqwestTransport::new()
        .post_json(&url, &request())
        .await
        .unwrap();

    assert_eq!(response.status, 429);
    assert_eq!(response.status_text, "Magic Link Quota Exceeded");
    assert_eq!(response.body, "slow down");
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{}/send-magic-link", addr)).unwrap();
    let result = ReqwestTransport::new().post_json(&url, &request()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_handler_end_to_end() {
    let (page, received) = spawn_backend(StatusCode::OK, "{}").await;
    let navigator = RecordingNavigator::new();
    let handler = MagicLinkFormHandler::new(
        MagicLinkConfig::from_page_url(&page).unwrap(),
        Variant::SignUp,
        ReqwestTransport::new(),
        &navigator,
    );

    let mut submission = submission(Some("magic-link-signup"), complete_fields());
    submission.current_url = page.clone();
    let outcome = handler.handle_submit(&submission).await;

    assert!(matches!(outcome, SubmitOutcome::Sent { .. }));
    assert_eq!(received.lock().unwrap().len(), 1);
    assert_eq!(
        navigator.last().unwrap().as_str(),
        page.join("magic-link-sent").unwrap().as_str()
    );
}

#[tokio::test]
async fn test_handler_end_to_end_failure() {
    let (page, _) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let navigator = RecordingNavigator::new();
    let handler = MagicLinkFormHandler::new(
        MagicLinkConfig::from_page_url(&page).unwrap(),
        Variant::SignIn,
        ReqwestTransport::new(),
        &navigator,
    );

    let mut submission = submission(Some("magic-link"), complete_fields());
    submission.current_url = page.clone();
    handler.handle_submit(&submission).await;

    let location = navigator.last().unwrap();
    assert_eq!(location.path(), page.path());
    assert_eq!(
        error_param(&location).as_deref(),
        Some("Failed to send magic link")
    );
}
