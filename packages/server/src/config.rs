use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// WordPress REST base, e.g. `https://notl.events/wp-json/wp/v2`
    pub wp_api_url: String,
    pub wp_username: Option<String>,
    pub wp_app_password: Option<String>,
    /// Interpreter for the scraping helper
    pub scraper_command: String,
    /// Path to the scraping helper script
    pub scraper_script: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// WordPress credentials are optional at boot; publishing rejects
    /// requests until both are present.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            wp_api_url: env::var("WP_API_URL")
                .unwrap_or_else(|_| "https://notl.events/wp-json/wp/v2".to_string()),
            wp_username: env::var("WP_USERNAME").ok(),
            wp_app_password: env::var("WP_APP_PASSWORD").ok(),
            scraper_command: env::var("SCRAPER_COMMAND").unwrap_or_else(|_| "python3".to_string()),
            scraper_script: env::var("SCRAPER_SCRIPT")
                .unwrap_or_else(|_| "scripts/scraper.py".to_string()),
        })
    }
}
