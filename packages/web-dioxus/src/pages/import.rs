//! Import flow page - the three-phase controller
//!
//! Routes data between the capture form, the preview form, and the result
//! panel. Phase transitions go through `ImportPhase::apply`; the record and
//! result live only in this component's signals.

use dioxus::prelude::*;

use crate::api;
use crate::components::{EventPreview, LoadingIndicator, StatusMessage, UrlForm};
use crate::state::{FlowEvent, ImportPhase};
use crate::types::EventData;

#[component]
pub fn Import() -> Element {
    let mut phase = use_signal(|| ImportPhase::Capture);
    let mut is_publishing = use_signal(|| false);

    let handle_publish = move |event: EventData| {
        spawn(async move {
            is_publishing.set(true);
            let result = api::publish_event(&event).await;
            let current = phase();
            phase.set(current.apply(FlowEvent::PublishFinished(result)));
            is_publishing.set(false);
        });
    };

    // The UI fully blocks while the publish call is in flight
    if is_publishing() {
        return rsx! { LoadingIndicator {} };
    }

    rsx! {
        main {
            class: "min-h-screen bg-gray-50 py-12 px-4",
            div {
                class: "max-w-4xl mx-auto",
                h1 {
                    class: "text-3xl font-bold text-center mb-8",
                    "NOTL Event Importer"
                }

                match phase() {
                    ImportPhase::Capture => rsx! {
                        UrlForm {
                            on_success: move |data| {
                                let current = phase();
                                phase.set(current.apply(FlowEvent::ScrapeSucceeded(data)));
                            }
                        }
                    },
                    ImportPhase::Preview(event_data) => rsx! {
                        EventPreview {
                            event_data,
                            on_submit: handle_publish,
                            on_back: move |_| {
                                let current = phase();
                                phase.set(current.apply(FlowEvent::Back));
                            }
                        }
                    },
                    ImportPhase::Result(result) => rsx! {
                        StatusMessage {
                            result,
                            on_reset: move |_| {
                                let current = phase();
                                phase.set(current.apply(FlowEvent::Reset));
                            }
                        }
                    },
                }
            }
        }
    }
}
