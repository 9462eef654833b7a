//! Submit interception for the email factor form.

use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::MagicLinkConfig;
use crate::error::{MagicLinkError, Result};
use crate::navigation::{error_redirect_url, Navigator};
use crate::request::{FormFields, MagicLinkRequest};
use crate::transport::MagicLinkTransport;
use crate::variant::Variant;

/// One submit event, as read from the page.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Id of the control that submitted the form, if any.
    pub submitter_id: Option<String>,
    pub fields: FormFields,
    /// Page the form lives on; failure redirects go back here.
    pub current_url: Url,
}

/// What the handler did with a submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Some other control submitted the form; native submission proceeds.
    PassThrough,
    /// Link requested; navigated to the confirmation page.
    Sent { location: Url },
    /// Navigated back to the form with the error attached.
    Failed { error: MagicLinkError, location: Url },
}

impl SubmitOutcome {
    pub fn location(&self) -> Option<&Url> {
        match self {
            SubmitOutcome::PassThrough => None,
            SubmitOutcome::Sent { location } | SubmitOutcome::Failed { location, .. } => {
                Some(location)
            }
        }
    }
}

pub struct MagicLinkFormHandler<T, N> {
    config: MagicLinkConfig,
    variant: Variant,
    transport: T,
    navigator: N,
}

impl<T, N> MagicLinkFormHandler<T, N>
where
    T: MagicLinkTransport,
    N: Navigator,
{
    pub fn new(config: MagicLinkConfig, variant: Variant, transport: T, navigator: N) -> Self {
        Self {
            config,
            variant,
            transport,
            navigator,
        }
    }

    pub fn config(&self) -> &MagicLinkConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether a submit from `submitter_id` belongs to this handler.
    pub fn intercepts(&self, submitter_id: Option<&str>) -> bool {
        submitter_id == Some(self.variant.submitter_id())
    }

    /// Handle a submit event end to end, navigating on both success and failure.
    ///
    /// Errors never escape: they end up in the `error` query parameter.
    pub async fn handle_submit(&self, submission: &Submission) -> SubmitOutcome {
        if !self.intercepts(submission.submitter_id.as_deref()) {
            debug!(
                variant = %self.variant,
                submitter = ?submission.submitter_id,
                "Submit from another control, letting it through"
            );
            return SubmitOutcome::PassThrough;
        }

        match self.submit(&submission.fields).await {
            Ok(_) => {
                let location = self.config.sent_url().clone();
                info!(variant = %self.variant, "Magic link requested");
                self.navigator.navigate(&location);
                SubmitOutcome::Sent { location }
            }
            Err(e) => {
                error!(variant = %self.variant, error = %e, "Failed to request magic link");
                let location = error_redirect_url(&submission.current_url, &e.to_string());
                self.navigator.navigate(&location);
                SubmitOutcome::Failed { error: e, location }
            }
        }
    }

    /// Validate the form values and send the request.
    pub async fn submit(&self, fields: &FormFields) -> Result<Value> {
        let request = MagicLinkRequest::from_fields(fields, self.config.provider())?;
        self.send(&request).await
    }

    /// POST the request once and decode the JSON reply.
    pub async fn send(&self, request: &MagicLinkRequest) -> Result<Value> {
        let message = self.variant.failure_message();

        let response = self
            .transport
            .post_json(self.config.send_url(), request)
            .await
            .map_err(|e| {
                error!(error = %e, "{}", message);
                MagicLinkError::Transport {
                    message,
                    status: None,
                    detail: e.to_string(),
                }
            })?;

        if !response.is_success() {
            error!(
                status = response.status,
                status_text = %response.status_text,
                body = %response.body,
                body_error = ?response.body_error,
                "{}",
                message
            );
            return Err(MagicLinkError::Transport {
                message,
                status: Some(response.status),
                detail: response.body,
            });
        }

        if let Some(read_error) = response.body_error {
            error!(status = response.status, error = %read_error, "Failed to read magic link response");
            return Err(MagicLinkError::Parse { detail: read_error });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            error!(error = %e, "Failed to parse magic link response");
            MagicLinkError::Parse {
                detail: e.to_string(),
            }
        })
    }
}
