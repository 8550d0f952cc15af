//! Editable event preview - the review phase of the import flow

use dioxus::prelude::*;

use crate::types::EventData;

/// Editable form over a local copy of the scraped record. Edits never
/// re-invoke the scraper; the copy is handed to `on_submit` as-is.
#[component]
pub fn EventPreview(
    event_data: EventData,
    on_submit: EventHandler<EventData>,
    on_back: EventHandler<()>,
) -> Element {
    let mut edited = use_signal(move || event_data.clone());

    rsx! {
        div {
            class: "w-full max-w-3xl mx-auto p-6 bg-white rounded-lg shadow-md",
            h2 {
                class: "text-2xl font-bold mb-6 text-center",
                "Preview Event Details"
            }

            form {
                onsubmit: move |_| on_submit.call(edited()),

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4 mb-6",

                    div {
                        class: "col-span-2",
                        label {
                            r#for: "eventName",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Event Name*"
                        }
                        input {
                            r#type: "text",
                            id: "eventName",
                            value: "{edited().event_name}",
                            oninput: move |e| edited.with_mut(|d| d.event_name = e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                            required: true
                        }
                    }

                    div {
                        label {
                            r#for: "date",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Date*"
                        }
                        input {
                            r#type: "date",
                            id: "date",
                            value: "{edited().date}",
                            oninput: move |e| edited.with_mut(|d| d.date = e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                            required: true
                        }
                    }

                    div {
                        label {
                            r#for: "time",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Time*"
                        }
                        input {
                            r#type: "text",
                            id: "time",
                            value: "{edited().time}",
                            oninput: move |e| edited.with_mut(|d| d.time = e.value()),
                            placeholder: "7:00 PM",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                            required: true
                        }
                    }

                    div {
                        class: "col-span-2",
                        label {
                            r#for: "location",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Location*"
                        }
                        input {
                            r#type: "text",
                            id: "location",
                            value: "{edited().location}",
                            oninput: move |e| edited.with_mut(|d| d.location = e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                            required: true
                        }
                    }

                    div {
                        class: "col-span-2",
                        label {
                            r#for: "host",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Host/Organizer"
                        }
                        input {
                            r#type: "text",
                            id: "host",
                            value: "{edited().host}",
                            oninput: move |e| edited.with_mut(|d| d.host = e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }
                    }

                    div {
                        class: "col-span-2",
                        div {
                            class: "flex items-center mb-2",
                            input {
                                r#type: "checkbox",
                                id: "isFree",
                                checked: edited().is_free,
                                onchange: move |e| edited.with_mut(|d| d.set_free(e.checked())),
                                class: "h-4 w-4 text-blue-600 focus:ring-blue-500 border-gray-300 rounded"
                            }
                            label {
                                r#for: "isFree",
                                class: "ml-2 block text-sm font-medium text-gray-700",
                                "This is a free event"
                            }
                        }

                        if !edited().is_free {
                            div {
                                label {
                                    r#for: "price",
                                    class: "block text-sm font-medium text-gray-700 mb-1",
                                    "Price"
                                }
                                input {
                                    r#type: "text",
                                    id: "price",
                                    value: edited().price.clone().unwrap_or_default(),
                                    oninput: move |e| edited.with_mut(|d| {
                                        let value = e.value();
                                        d.price = if value.is_empty() { None } else { Some(value) };
                                    }),
                                    placeholder: "$25.00",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                }
                            }
                        }
                    }

                    div {
                        class: "col-span-2",
                        label {
                            r#for: "description",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Description*"
                        }
                        textarea {
                            id: "description",
                            value: "{edited().description}",
                            oninput: move |e| edited.with_mut(|d| d.description = e.value()),
                            rows: "6",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                            required: true
                        }
                    }

                    div {
                        class: "col-span-2",
                        label {
                            r#for: "imageUrl",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Event Image URL"
                        }
                        input {
                            r#type: "url",
                            id: "imageUrl",
                            value: edited().image_url.clone().unwrap_or_default(),
                            oninput: move |e| edited.with_mut(|d| {
                                let value = e.value();
                                d.image_url = if value.is_empty() { None } else { Some(value) };
                            }),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }

                        if let Some(image_url) = edited().image_url.clone() {
                            div {
                                class: "mt-2",
                                p { class: "text-sm text-gray-500 mb-1", "Image Preview:" }
                                img {
                                    src: "{image_url}",
                                    alt: "Event preview",
                                    class: "max-h-40 object-contain border border-gray-200 rounded"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "flex justify-between",
                    button {
                        r#type: "button",
                        onclick: move |_| on_back.call(()),
                        class: "py-2 px-4 border border-gray-300 rounded-md text-gray-700 bg-white hover:bg-gray-50",
                        "Back"
                    }
                    button {
                        r#type: "submit",
                        class: "py-2 px-4 rounded-md text-white font-medium bg-green-600 hover:bg-green-700 transition-colors",
                        "Create WordPress Post"
                    }
                }
            }
        }
    }
}
