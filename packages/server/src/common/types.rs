use serde::{Deserialize, Serialize};

/// One scraped/edited event flowing through the import pipeline.
///
/// Produced by the extraction gateway, edited only in the review form,
/// consumed read-only by the publication gateway. Field names on the wire
/// are camelCase to match the frontend. Nothing is persisted; the record
/// lives for one browser session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Required for publishing; absent keys deserialize to empty so the
    /// validation path reports them instead of a serde rejection.
    #[serde(default)]
    pub event_name: String,
    /// Free-form date text; the UI solicits an ISO calendar date but any
    /// text is accepted as-is.
    #[serde(default)]
    pub date: String,
    /// Free-form time text, e.g. "7:00 PM"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub is_free: bool,
    /// Only meaningful when `is_free` is false; the review form clears it
    /// whenever the free flag turns on.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl EventRecord {
    /// True when any field required for publishing is missing or blank.
    pub fn missing_required_fields(&self) -> bool {
        self.event_name.trim().is_empty()
            || self.date.trim().is_empty()
            || self.location.trim().is_empty()
            || self.description.trim().is_empty()
    }

    /// Price line shown in the post body: "Free" for free events, otherwise
    /// the listed price with a contact-the-organizer fallback.
    pub fn price_display(&self) -> String {
        if self.is_free {
            "Free".to_string()
        } else {
            self.price
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| "Contact organizer for pricing".to_string())
        }
    }
}

/// Outcome of one publish attempt, rendered once and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishResponse {
    pub fn published(post_id: i64, post_url: String) -> Self {
        Self {
            success: true,
            post_id: Some(post_id),
            post_url: Some(post_url),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            post_id: None,
            post_url: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EventRecord {
        EventRecord {
            event_name: "Test Event".to_string(),
            date: "2025-04-15".to_string(),
            time: "7:00 PM".to_string(),
            location: "Test Location".to_string(),
            description: "Test Description".to_string(),
            host: "Test Host".to_string(),
            is_free: true,
            price: None,
            image_url: None,
        }
    }

    #[test]
    fn required_fields_must_be_non_blank() {
        assert!(!record().missing_required_fields());

        let mut missing_name = record();
        missing_name.event_name = "  ".to_string();
        assert!(missing_name.missing_required_fields());

        let mut missing_date = record();
        missing_date.date = String::new();
        assert!(missing_date.missing_required_fields());

        // host is optional
        let mut no_host = record();
        no_host.host = String::new();
        assert!(!no_host.missing_required_fields());
    }

    #[test]
    fn price_display_covers_free_priced_and_unknown() {
        assert_eq!(record().price_display(), "Free");

        let mut priced = record();
        priced.is_free = false;
        priced.price = Some("$25.00".to_string());
        assert_eq!(priced.price_display(), "$25.00");

        let mut unknown = record();
        unknown.is_free = false;
        unknown.price = None;
        assert_eq!(unknown.price_display(), "Contact organizer for pricing");
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["eventName"], "Test Event");
        assert_eq!(json["isFree"], true);
        assert!(json.get("imageUrl").is_some());

        let parsed: EventRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn failed_response_omits_post_fields() {
        let json = serde_json::to_value(PublishResponse::failed("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("postId").is_none());
        assert!(json.get("postUrl").is_none());
    }
}
