//! URL capture form - the first phase of the import flow

use dioxus::prelude::*;

use crate::api;
use crate::types::EventData;

/// The string must parse as a URL and carry a host; `/scrape` re-validates
/// on the server side.
fn is_valid_url(input: &str) -> bool {
    url::Url::parse(input).map(|u| u.has_host()).unwrap_or(false)
}

/// Collects an event URL and asks the server to scrape it. Extraction
/// failures render inline; the phase only advances on success.
#[component]
pub fn UrlForm(on_success: EventHandler<EventData>) -> Element {
    let mut url = use_signal(String::new);
    let mut is_loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_| {
        if is_loading() {
            return;
        }

        let url_value = url().trim().to_string();
        if !is_valid_url(&url_value) {
            error.set(Some("Please enter a valid URL".to_string()));
            return;
        }

        spawn(async move {
            is_loading.set(true);
            error.set(None);

            match api::scrape_event(&url_value).await {
                Ok(data) => on_success.call(data),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_loading.set(false);
        });
    };

    rsx! {
        div {
            class: "w-full max-w-md mx-auto p-6 bg-white rounded-lg shadow-md",
            h2 {
                class: "text-2xl font-bold mb-6 text-center",
                "Import Event from URL"
            }

            form {
                onsubmit: handle_submit,

                div {
                    class: "mb-4",
                    label {
                        r#for: "url",
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "Event URL"
                    }
                    input {
                        r#type: "text",
                        id: "url",
                        value: "{url}",
                        oninput: move |e| url.set(e.value()),
                        placeholder: "https://example.com/event",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                        required: true
                    }
                    p {
                        class: "mt-1 text-xs text-gray-500",
                        "Enter the URL of an event in Niagara-on-the-Lake"
                    }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-100 text-red-700 rounded-md",
                        "{err}"
                    }
                }

                button {
                    r#type: "submit",
                    disabled: is_loading(),
                    class: if is_loading() {
                        "w-full py-2 px-4 rounded-md text-white font-medium bg-blue-400 transition-colors"
                    } else {
                        "w-full py-2 px-4 rounded-md text-white font-medium bg-blue-600 hover:bg-blue-700 transition-colors"
                    },
                    if is_loading() {
                        "Extracting Event Details..."
                    } else {
                        "Extract Event Details"
                    }
                }
            }
        }
    }
}
