//! Wire types shared with the import API.

use serde::{Deserialize, Serialize};

/// One scraped/edited event. Mirrors the server's record; camelCase on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub event_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub host: String,
    pub is_free: bool,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl EventData {
    /// Set the free-event flag. Any price is cleared the moment the flag
    /// turns on; price text is only meaningful for paid events.
    pub fn set_free(&mut self, is_free: bool) {
        self.is_free = is_free;
        if is_free {
            self.price = None;
        }
    }
}

/// Outcome of a publish attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub success: bool,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub post_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PublishResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            post_id: None,
            post_url: None,
            error: Some(error.into()),
        }
    }
}
