use url::Url;

use crate::error::Result;

/// Provider identifier sent with every request.
pub const DEFAULT_PROVIDER: &str = "builtin::local_magic_link";

/// Id of the form element carrying the email factor.
pub const DEFAULT_FORM_ID: &str = "email-factor";

const SEND_MAGIC_LINK_PATH: &str = "../send-magic-link";
const MAGIC_LINK_SENT_PATH: &str = "./magic-link-sent";

/// Endpoints and constants used by the form handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicLinkConfig {
    send_url: Url,
    sent_url: Url,
    provider: String,
    form_id: String,
}

impl MagicLinkConfig {
    /// Create a config with explicit endpoints.
    pub fn new(send_url: Url, sent_url: Url) -> Self {
        Self {
            send_url,
            sent_url,
            provider: DEFAULT_PROVIDER.to_string(),
            form_id: DEFAULT_FORM_ID.to_string(),
        }
    }

    /// Resolve the endpoints relative to the page hosting the form.
    ///
    /// The send endpoint lives one level up (`../send-magic-link`), the
    /// confirmation page next to the form (`./magic-link-sent`).
    pub fn from_page_url(page_url: &Url) -> Result<Self> {
        let send_url = page_url.join(SEND_MAGIC_LINK_PATH)?;
        let sent_url = page_url.join(MAGIC_LINK_SENT_PATH)?;
        Ok(Self::new(send_url, sent_url))
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
        self.form_id = form_id.into();
        self
    }

    pub fn send_url(&self) -> &Url {
        &self.send_url
    }

    pub fn sent_url(&self) -> &Url {
        &self.sent_url
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }
}
