//! Passwordless magic link form handler
//!
//! Intercepts the email factor form, posts the email and PKCE challenge to the
//! `send-magic-link` endpoint, and sends the user either to the
//! `magic-link-sent` page or back to the form with an `error` query parameter.
//!
//! The handler knows nothing about the browser: the page URL, the HTTP client
//! and the navigation target are all passed in, so the same code runs under
//! wasm and in native tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use magic_link::{MagicLinkConfig, MagicLinkFormHandler, ReqwestTransport, Variant};
//!
//! let config = MagicLinkConfig::from_page_url(&page_url)?;
//! let handler = MagicLinkFormHandler::new(config, Variant::SignIn, ReqwestTransport::new(), navigator);
//!
//! let outcome = handler.handle_submit(&submission).await;
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod navigation;
pub mod request;
pub mod transport;
pub mod variant;

pub use config::{MagicLinkConfig, DEFAULT_FORM_ID, DEFAULT_PROVIDER};
pub use error::{MagicLinkError, Result};
pub use handler::{MagicLinkFormHandler, SubmitOutcome, Submission};
pub use navigation::{error_redirect_url, Navigator};
pub use request::{FormFields, MagicLinkRequest};
pub use transport::{HttpResponse, MagicLinkTransport, TransportFailure};
pub use variant::Variant;

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;

pub use url::Url;
