//! Request a magic link from a terminal, exactly as the email factor form would.
//!
//! ```bash
//! MAGIC_LINK_PAGE_URL=http://localhost:5656/db/main/ext/auth/ui/signin \
//!     magic-link --email ada@example.com --redirect-to http://localhost:3000/cb --challenge abc
//! ```

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use magic_link::{
    FormFields, MagicLinkFormHandler, Navigator, ReqwestTransport, SubmitOutcome, Submission, Url,
    Variant,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "magic-link", about = "Request a magic link the way the sign-in form does")]
struct Args {
    /// sign-in or sign-up
    #[arg(long, default_value = "sign-in")]
    variant: Variant,

    #[arg(long)]
    email: Option<String>,

    /// Callback URL (form field `redirect_to`)
    #[arg(long)]
    redirect_to: Option<String>,

    /// PKCE challenge
    #[arg(long)]
    challenge: Option<String>,

    /// Page hosting the form; defaults to MAGIC_LINK_PAGE_URL
    #[arg(long)]
    page_url: Option<Url>,

    /// Pretend another submit control was used
    #[arg(long)]
    submitter: Option<String>,
}

/// Prints where a browser would be sent.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, url: &Url) {
        println!("→ {}", url);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,magic_link=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = Config::from_env(args.page_url.clone()).context("Failed to load configuration")?;
    tracing::debug!(page_url = %config.page_url, provider = %config.provider, "Configuration loaded");

    let handler = MagicLinkFormHandler::new(
        config.magic_link_config()?,
        args.variant,
        ReqwestTransport::new(),
        PrintNavigator,
    );

    let submission = Submission {
        submitter_id: Some(
            args.submitter
                .unwrap_or_else(|| args.variant.submitter_id().to_string()),
        ),
        fields: FormFields::new(args.email, args.redirect_to, args.challenge),
        current_url: config.page_url.clone(),
    };

    match handler.handle_submit(&submission).await {
        SubmitOutcome::PassThrough => {
            println!(
                "Not the {} control; the browser would submit the form natively",
                args.variant
            );
            Ok(())
        }
        SubmitOutcome::Sent { .. } => Ok(()),
        SubmitOutcome::Failed { error, .. } => Err(error.into()),
    }
}
