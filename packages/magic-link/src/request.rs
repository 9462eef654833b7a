//! Form values and the request payload built from them.

use serde::Serialize;

use crate::error::{MagicLinkError, Result};

pub const EMAIL_FIELD: &str = "email";
pub const REDIRECT_TO_FIELD: &str = "redirect_to";
pub const CHALLENGE_FIELD: &str = "challenge";

/// Raw values read from the email factor form.
///
/// Empty strings are stored as `None`: a blank input is as good as no input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: Option<String>,
    pub redirect_to: Option<String>,
    pub challenge: Option<String>,
}

impl FormFields {
    pub fn new(
        email: Option<String>,
        redirect_to: Option<String>,
        challenge: Option<String>,
    ) -> Self {
        Self {
            email: non_empty(email),
            redirect_to: non_empty(redirect_to),
            challenge: non_empty(challenge),
        }
    }

    /// Read the fields by name from any form-like source (e.g. `FormData`).
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self::new(
            lookup(EMAIL_FIELD),
            lookup(REDIRECT_TO_FIELD),
            lookup(CHALLENGE_FIELD),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// JSON body posted to the send endpoint.
///
/// Only constructible with all four values present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicLinkRequest {
    email: String,
    provider: String,
    callback_url: String,
    challenge: String,
}

impl MagicLinkRequest {
    /// Combine the form values with the configured provider.
    pub fn from_fields(fields: &FormFields, provider: &str) -> Result<Self> {
        Self::from_parts(
            fields.email.clone(),
            Some(provider.to_string()),
            fields.redirect_to.clone(),
            fields.challenge.clone(),
        )
    }

    fn from_parts(
        email: Option<String>,
        provider: Option<String>,
        callback_url: Option<String>,
        challenge: Option<String>,
    ) -> Result<Self> {
        let email = non_empty(email);
        let provider = non_empty(provider);
        let callback_url = non_empty(callback_url);
        let challenge = non_empty(challenge);

        match (email, provider, callback_url, challenge) {
            (Some(email), Some(provider), Some(callback_url), Some(challenge)) => Ok(Self {
                email,
                provider,
                callback_url,
                challenge,
            }),
            (email, provider, callback_url, challenge) => {
                let missing = [
                    ("email", email.is_none()),
                    ("provider", provider.is_none()),
                    ("callbackUrl", callback_url.is_none()),
                    ("challenge", challenge.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(MagicLinkError::MissingFields { missing })
            }
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    pub fn challenge(&self) -> &str {
        &self.challenge
    }
}
