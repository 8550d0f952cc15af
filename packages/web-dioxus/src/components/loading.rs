//! Loading components

use dioxus::prelude::*;

/// Full-page blocking overlay shown while a publish is in flight
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-white bg-opacity-75 z-50",
            div {
                class: "text-center",
                div {
                    class: "animate-spin rounded-full h-16 w-16 border-t-4 border-b-4 border-blue-600 mx-auto mb-4"
                }
                p { class: "text-lg font-medium text-gray-700", "Processing..." }
            }
        }
    }
}
