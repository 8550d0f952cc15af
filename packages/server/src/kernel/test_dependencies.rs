// Mock implementations for testing
//
// Recording doubles that stand in for the external collaborators in
// route-level tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::BaseEventExtractor;
use crate::common::{AppError, EventRecord};

/// Recording extractor double: returns queued responses and captures the
/// URLs it was asked to extract.
pub struct MockEventExtractor {
    responses: Arc<Mutex<Vec<Result<EventRecord, AppError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockEventExtractor {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful extraction result
    pub fn with_record(self, record: EventRecord) -> Self {
        self.responses.lock().unwrap().push(Ok(record));
        self
    }

    /// Queue an extraction failure
    pub fn with_failure(self, message: &str, details: &str) -> Self {
        self.responses.lock().unwrap().push(Err(AppError::Extraction {
            message: message.to_string(),
            details: details.to_string(),
        }));
        self
    }

    /// URLs captured from extract calls
    pub fn extract_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockEventExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEventExtractor for MockEventExtractor {
    async fn extract(&self, url: &str) -> Result<EventRecord, AppError> {
        self.calls.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(AppError::Extraction {
                message: "No mock response configured".to_string(),
                details: String::new(),
            })
        } else {
            // responses come back in the order they were queued
            responses.remove(0)
        }
    }
}
