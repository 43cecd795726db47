use dioxus::prelude::*;

use crate::domain::{format_price, PriceBreakdown, SkipOption};

#[component]
pub fn ActionBar(
    selected: Option<SkipOption>,
    on_back: EventHandler<()>,
    on_continue: EventHandler<i64>,
) -> Element {
    let Some(skip) = selected else {
        return rsx! {
            div { class: "fixed bottom-0 left-0 z-40 flex w-full items-center justify-center bg-gray-900 shadow-lg",
                div { class: "mx-auto max-w-6xl px-6 py-4 text-center",
                    p { class: "text-lg text-gray-400", "No skip selected. Please choose a skip to proceed." }
                }
            }
        };
    };

    let breakdown = PriceBreakdown::for_skip(&skip);
    let id = skip.id;

    rsx! {
        div { class: "fixed bottom-0 left-0 z-40 w-full bg-gray-900 shadow-lg",
            div { class: "mx-auto flex max-w-6xl flex-col gap-6 px-6 py-4 sm:flex-row sm:items-start sm:justify-between",
                p { class: "text-sm font-bold text-gray-400 sm:mr-6 sm:flex-1",
                    "Imagery and information shown throughout this website may not reflect exact specs. Colors and options may vary."
                }
                div { class: "space-y-1 text-xs sm:flex-1",
                    h2 { class: "text-base font-semibold", "{skip.size} Yard Skip" }
                    p { class: "text-gray-300", "Location: {skip.location_label()}" }
                    p { class: "text-gray-300", "Base Price: {format_price(breakdown.base_price)}" }
                    p { class: "text-gray-300", "VAT: {format_price(breakdown.vat_amount)}" }
                    if let Some(transport) = breakdown.transport_cost {
                        p { class: "text-gray-300", "Transport cost: {format_price(transport)}" }
                    }
                    if let Some(per_tonne) = breakdown.per_tonne_cost {
                        p { class: "text-gray-300", "Cost per tonne: {format_price(per_tonne)}" }
                    }
                    p { class: "text-lg font-bold text-blue-400", "Total: {format_price(breakdown.total)}" }
                }
                div { class: "flex gap-4 sm:flex-none sm:justify-end",
                    button {
                        class: "rounded bg-gray-700 px-6 py-2 font-semibold text-gray-300 transition hover:bg-gray-600",
                        onclick: move |_| on_back.call(()),
                        "Back"
                    }
                    button {
                        class: "rounded bg-purple-600 px-8 py-3 font-bold text-white transition hover:bg-purple-700",
                        "aria-label": "Continue",
                        onclick: move |_| on_continue.call(id),
                        "Continue"
                    }
                }
            }
        }
    }
}
