// Mock transport and navigator for handler tests.

#![allow(dead_code)]

use async_trait::async_trait;
use magic_link::{
    FormFields, HttpResponse, MagicLinkConfig, MagicLinkRequest, MagicLinkTransport, Navigator,
    Submission, TransportFailure, Url,
};
use std::sync::{Arc, Mutex};

pub const PAGE_URL: &str = "https://auth.example.com/db/main/ext/auth/ui/signin?challenge=abc";

/// A POST captured by the mock transport
#[derive(Debug, Clone)]
pub struct PostCall {
    pub url: Url,
    pub body: serde_json::Value,
}

#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<Vec<Result<HttpResponse, TransportFailure>>>>,
    calls: Arc<Mutex<Vec<PostCall>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn with_response(self, status: u16, body: &str) -> Self {
        let status_text = match status {
            200 => "OK",
            400 => "Bad Request",
            500 => "Internal Server Error",
            _ => "",
        };
        self.responses.lock().unwrap().push(Ok(HttpResponse::from_body_result::<String>(
            status,
            status_text.to_string(),
            Ok(body.to_string()),
        )));
        self
    }

    /// Queue a response whose status arrived but whose body could not be read
    pub fn with_unreadable_body(self, status: u16, read_error: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(HttpResponse::from_body_result(
            status,
            String::new(),
            Err::<String, _>(read_error.to_string()),
        )));
        self
    }

    /// Queue a network-level failure
    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(TransportFailure(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<PostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl MagicLinkTransport for MockTransport {
    async fn post_json(
        &self,
        url: &Url,
        request: &MagicLinkRequest,
    ) -> Result<HttpResponse, TransportFailure> {
        self.calls.lock().unwrap().push(PostCall {
            url: url.clone(),
            body: serde_json::to_value(request).unwrap(),
        });

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok(HttpResponse::from_body_result::<String>(
                200,
                "OK".to_string(),
                Ok("{}".to_string()),
            ))
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Url>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Url> {
        self.visited.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Url> {
        self.visited.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &Url) {
        self.visited.lock().unwrap().push(url.clone());
    }
}

pub fn page_url() -> Url {
    Url::parse(PAGE_URL).unwrap()
}

pub fn config() -> MagicLinkConfig {
    MagicLinkConfig::from_page_url(&page_url()).unwrap()
}

pub fn complete_fields() -> FormFields {
    FormFields::new(
        Some("ada@example.com".to_string()),
        Some("https://app.example.com/auth/callback".to_string()),
        Some("pkce-challenge-123".to_string()),
    )
}

pub fn submission(submitter_id: Option<&str>, fields: FormFields) -> Submission {
    Submission {
        submitter_id: submitter_id.map(str::to_string),
        fields,
        current_url: page_url(),
    }
}

/// The `error` query parameter of a navigation target
pub fn error_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "error")
        .map(|(_, v)| v.into_owned())
}
