//! Import flow state machine
//!
//! The three-phase flow (capture -> preview -> result) is an explicit state
//! object; every transition is a pure function of (phase, event). Nothing is
//! persisted, so a page reload always restarts at capture.

use crate::types::{EventData, PublishResult};

/// Current phase of the import flow
#[derive(Debug, Clone, PartialEq)]
pub enum ImportPhase {
    /// Collecting the event URL
    Capture,
    /// Reviewing and editing the scraped record
    Preview(EventData),
    /// Showing the publish outcome
    Result(PublishResult),
}

/// Events driving phase transitions
#[derive(Debug, Clone)]
pub enum FlowEvent {
    ScrapeSucceeded(EventData),
    PublishFinished(PublishResult),
    /// Discard the edited copy and return to capture
    Back,
    /// Clear everything and start over
    Reset,
}

impl ImportPhase {
    /// Apply one event, producing the next phase. Events that do not apply
    /// to the current phase leave it unchanged.
    pub fn apply(self, event: FlowEvent) -> ImportPhase {
        match (self, event) {
            (ImportPhase::Capture, FlowEvent::ScrapeSucceeded(data)) => ImportPhase::Preview(data),
            (ImportPhase::Preview(_), FlowEvent::PublishFinished(result)) => {
                ImportPhase::Result(result)
            }
            (ImportPhase::Preview(_), FlowEvent::Back) => ImportPhase::Capture,
            (_, FlowEvent::Reset) => ImportPhase::Capture,
            (phase, _) => phase,
        }
    }
}
