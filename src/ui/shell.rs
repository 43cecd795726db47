use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

/// Checkout steps shown in the breadcrumb; this app covers "Select Skip".
const STEPS: [(&str, &str); 6] = [
    ("📍", "Postcode"),
    ("🗑️", "Waste Type"),
    ("📋", "Select Skip"),
    ("🔎", "Permit Check"),
    ("📅", "Choose Date"),
    ("💳", "Payment"),
];

const CURRENT_STEP: &str = "Select Skip";

#[component]
pub fn Shell(children: Element) -> Element {
    let current_index = STEPS
        .iter()
        .position(|(_, label)| *label == CURRENT_STEP)
        .unwrap_or(0);
    let last = STEPS.len() - 1;

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-gray-900 to-gray-800 text-white font-sans",
            header {
                class: "bg-gradient-to-tr from-gray-950 to-gray-900 pb-8 shadow-md",
                nav { class: "mx-auto max-w-7xl px-6 pt-8",
                    ol { class: "flex flex-wrap items-center justify-center gap-x-4 gap-y-3 text-sm",
                        for (idx, (icon, label)) in STEPS.iter().enumerate() {
                            li { key: "{label}", class: "flex items-center gap-2",
                                StepBadge {
                                    icon: *icon,
                                    label: *label,
                                    current: idx == current_index,
                                    completed: idx < current_index,
                                }
                                if idx < last {
                                    span { class: "text-gray-500", "›" }
                                }
                            }
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-4 py-8",
                {children}
            }
            footer { class: "pb-4 text-center text-xs text-gray-600",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn StepBadge(icon: &'static str, label: &'static str, current: bool, completed: bool) -> Element {
    let class = if current {
        "flex items-center gap-2 rounded-full bg-purple-600 px-3 py-1 text-white shadow"
    } else if completed {
        "flex items-center gap-2 rounded-full bg-gray-800 px-3 py-1 text-gray-300"
    } else {
        "flex items-center gap-2 rounded-full bg-gray-800 px-3 py-1 text-gray-500"
    };

    rsx! {
        div { class: "{class}",
            span { "{icon}" }
            span { class: "whitespace-nowrap font-medium", "{label}" }
        }
    }
}
