//! Process-spawning extractor - runs the external scraping helper.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

use super::BaseEventExtractor;
use crate::common::{AppError, EventRecord};

const SCRAPE_FAILED: &str = "Failed to scrape event details";

/// Extractor that shells out to the scraping helper, one child process per
/// call. The helper receives the URL as its single positional argument and
/// prints one event JSON document on stdout; any bytes on stderr signal
/// failure even when stdout also carried data.
pub struct ScriptExtractor {
    command: String,
    script: PathBuf,
}

impl ScriptExtractor {
    pub fn new(command: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            script: script.into(),
        }
    }
}

#[async_trait]
impl BaseEventExtractor for ScriptExtractor {
    async fn extract(&self, url: &str) -> Result<EventRecord, AppError> {
        debug!(url, command = %self.command, script = %self.script.display(), "Invoking scraper");

        let output = Command::new(&self.command)
            .arg(&self.script)
            .arg(url)
            .output()
            .await
            .map_err(|e| AppError::Extraction {
                message: SCRAPE_FAILED.to_string(),
                details: format!("Could not launch scraper: {}", e),
            })?;

        // Any bytes on stderr fail the call, whitespace included
        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(stderr = %stderr, "Scraper reported an error");
            return Err(AppError::Extraction {
                message: SCRAPE_FAILED.to_string(),
                details: stderr.into_owned(),
            });
        }

        if !output.status.success() {
            return Err(AppError::Extraction {
                message: SCRAPE_FAILED.to_string(),
                details: format!("Scraper exited with {}", output.status),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout).map_err(|e| AppError::Extraction {
            message: SCRAPE_FAILED.to_string(),
            details: format!("Scraper output was not a valid event: {}", e),
        })
    }
}
