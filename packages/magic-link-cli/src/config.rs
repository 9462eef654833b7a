use anyhow::{Context, Result};
use dotenvy::dotenv;
use magic_link::{MagicLinkConfig, Url, DEFAULT_PROVIDER};
use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Page the email factor form would be served from
    pub page_url: Url,
    pub provider: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `page_url` (from `--page-url`) wins over `MAGIC_LINK_PAGE_URL`.
    pub fn from_env(page_url: Option<Url>) -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let page_url = match page_url {
            Some(url) => url,
            None => env::var("MAGIC_LINK_PAGE_URL")
                .context("MAGIC_LINK_PAGE_URL must be set (or pass --page-url)")?
                .parse()
                .context("MAGIC_LINK_PAGE_URL must be a valid URL")?,
        };

        Ok(Self {
            page_url,
            provider: env::var("MAGIC_LINK_PROVIDER")
                .unwrap_or_else(|_| DEFAULT_PROVIDER.to_string()),
        })
    }

    pub fn magic_link_config(&self) -> Result<MagicLinkConfig> {
        let config = MagicLinkConfig::from_page_url(&self.page_url)
            .context("Failed to resolve magic link endpoints")?;
        Ok(config.with_provider(self.provider.clone()))
    }
}
