// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
//
// Naming convention: Base* for trait names (e.g., BaseEventExtractor)

use async_trait::async_trait;

use crate::common::{AppError, EventRecord};

#[async_trait]
pub trait BaseEventExtractor: Send + Sync {
    /// Turn an event page URL into a structured event record
    ///
    /// One external invocation per call; implementations hold no state
    /// between calls and do not retry.
    async fn extract(&self, url: &str) -> Result<EventRecord, AppError>;
}
