//! `fetch` transport and `window.location` navigator.

use async_trait::async_trait;
use gloo_net::http::Request;
use magic_link::{HttpResponse, MagicLinkRequest, MagicLinkTransport, Navigator, TransportFailure};
use tracing::error;
use url::Url;
use wasm_bindgen::JsValue;

/// Transport backed by `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl MagicLinkTransport for GlooTransport {
    async fn post_json(
        &self,
        url: &Url,
        request: &MagicLinkRequest,
    ) -> Result<HttpResponse, TransportFailure> {
        let response = Request::post(url.as_str())
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| TransportFailure(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportFailure(e.to_string()))?;

        let body = response.text().await;

        Ok(HttpResponse::from_body_result(
            response.status(),
            response.status_text(),
            body,
        ))
    }
}

/// Navigates by assigning `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &Url) {
        let result = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|window| window.location().set_href(url.as_str()));

        if let Err(e) = result {
            error!(url = %url, error = ?e, "Navigation failed");
        }
    }
}

/// Current page URL, parsed.
pub fn current_url() -> Result<Url, JsValue> {
    let href = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .location()
        .href()?;

    Url::parse(&href).map_err(|e| JsValue::from_str(&format!("Invalid page URL: {}", e)))
}
