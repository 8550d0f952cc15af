//! Publish outcome panel - the result phase of the import flow

use dioxus::prelude::*;

use crate::types::PublishResult;

/// Success view with a link to the created post, or failure view with the
/// error text. Reset returns the flow to the capture phase.
#[component]
pub fn StatusMessage(result: PublishResult, on_reset: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "w-full max-w-md mx-auto p-6 bg-white rounded-lg shadow-md",
            if result.success {
                div {
                    class: "text-center",
                    div {
                        class: "mb-4 mx-auto w-16 h-16 bg-green-100 rounded-full flex items-center justify-center",
                        span { class: "text-3xl text-green-600", "\u{2713}" }
                    }
                    h2 { class: "text-2xl font-bold mb-2 text-gray-800", "Success!" }
                    p {
                        class: "text-gray-600 mb-4",
                        "The event has been successfully imported to WordPress."
                    }
                    if let Some(post_url) = result.post_url.clone() {
                        a {
                            href: "{post_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "inline-block mb-4 text-blue-600 hover:text-blue-800 hover:underline",
                            "View Post on WordPress \u{2192}"
                        }
                    }
                    button {
                        onclick: move |_| on_reset.call(()),
                        class: "w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-md transition-colors",
                        "Import Another Event"
                    }
                }
            } else {
                div {
                    class: "text-center",
                    div {
                        class: "mb-4 mx-auto w-16 h-16 bg-red-100 rounded-full flex items-center justify-center",
                        span { class: "text-3xl text-red-600", "\u{2715}" }
                    }
                    h2 { class: "text-2xl font-bold mb-2 text-gray-800", "Error" }
                    p {
                        class: "text-red-600 mb-4",
                        {result.error.clone().unwrap_or_else(|| {
                            "An unexpected error occurred while importing the event.".to_string()
                        })}
                    }
                    button {
                        onclick: move |_| on_reset.call(()),
                        class: "w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-md transition-colors",
                        "Try Again"
                    }
                }
            }
        }
    }
}
