//! HTTP seam between the handler and whatever can issue a POST.
//!
//! The trait is `?Send` so browser futures (which are not `Send`) can implement it.

use async_trait::async_trait;
use url::Url;

use crate::request::MagicLinkRequest;

/// Response as seen by the handler: status line plus the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase as sent by the server (or the standard one when it sent none).
    pub status_text: String,
    pub body: String,
    /// Set when the status line arrived but reading the body failed; `body` is then empty.
    pub body_error: Option<String>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Split a body read result into `body` / `body_error`.
    pub fn from_body_result<E: std::fmt::Display>(
        status: u16,
        status_text: String,
        body: std::result::Result<String, E>,
    ) -> Self {
        let (body, body_error) = match body {
            Ok(body) => (body, None),
            Err(e) => (String::new(), Some(e.to_string())),
        };

        Self {
            status,
            status_text,
            body,
            body_error,
        }
    }
}

/// The request never reached a server (DNS, refused connection, CORS...).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

#[async_trait(?Send)]
pub trait MagicLinkTransport {
    /// POST `request` as JSON to `url`. Must issue exactly one request.
    async fn post_json(
        &self,
        url: &Url,
        request: &MagicLinkRequest,
    ) -> Result<HttpResponse, TransportFailure>;
}

#[cfg(feature = "reqwest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use super::*;
    use reqwest::{header, Client};

    /// Transport backed by `reqwest`, for native hosts.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    #[async_trait(?Send)]
    impl MagicLinkTransport for ReqwestTransport {
        async fn post_json(
            &self,
            url: &Url,
            request: &MagicLinkRequest,
        ) -> Result<HttpResponse, TransportFailure> {
            let response = self
                .client
                .post(url.clone())
                .header(header::CONTENT_TYPE, "application/json")
                .json(request)
                .send()
                .await
                .map_err(|e| TransportFailure(e.to_string()))?;

            let status = response.status();
            // hyper only keeps the reason phrase when it differs from the canonical one.
            let status_text = match response.extensions().get::<hyper::ext::ReasonPhrase>() {
                Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
                None => status.canonical_reason().unwrap_or_default().to_string(),
            };
            let body = response.text().await;

            Ok(HttpResponse::from_body_result(
                status.as_u16(),
                status_text,
                body,
            ))
        }
    }
}
