//! Sign-in and sign-up flavours of the form handler.

use std::fmt;
use std::str::FromStr;

/// Which submit control the handler answers to, and how it reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    SignIn,
    SignUp,
}

impl Variant {
    /// Id of the submit control that triggers interception.
    pub const fn submitter_id(self) -> &'static str {
        match self {
            Variant::SignIn => "magic-link",
            Variant::SignUp => "magic-link-signup",
        }
    }

    /// User-visible message for a failed or rejected request.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Variant::SignIn => "Failed to send magic link",
            Variant::SignUp => "Failed to register magic link",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::SignIn => "sign-in",
            Variant::SignUp => "sign-up",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sign-in" | "signin" | "magic-link" => Ok(Variant::SignIn),
            "sign-up" | "signup" | "magic-link-signup" => Ok(Variant::SignUp),
            other => Err(format!(
                "unknown variant '{}', expected sign-in or sign-up",
                other
            )),
        }
    }
}
