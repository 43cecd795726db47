use dioxus::prelude::*;

use crate::domain::{format_price, SkipCard, WarningSeverity};
use crate::infra::images::ImageResolver;

fn warning_class(severity: WarningSeverity) -> &'static str {
    match severity {
        WarningSeverity::Red => "bg-red-600 text-white",
        WarningSeverity::Yellow => "bg-yellow-400 text-black",
    }
}

#[component]
pub fn SkipOptionCard(card: SkipCard, on_activate: EventHandler<i64>) -> Element {
    let images = use_context::<ImageResolver>();
    let image_url = images.resolve_image_url(card.skip.size);

    let id = card.skip.id;
    let selectable = card.info.is_selectable;
    let price = format_price(card.total_price);

    let frame = match (card.is_selected, selectable) {
        (true, _) => "border-blue-600 ring-2 ring-blue-300 cursor-pointer",
        (false, true) => "border-gray-700 cursor-pointer hover:border-blue-500",
        (false, false) => "skip-card--disabled border-gray-700 cursor-not-allowed opacity-70",
    };
    let title = if card.info.has_red_warnings {
        "This skip option cannot be selected due to red warnings."
    } else {
        ""
    };
    let (button_label, button_class, aria_label) = match (card.is_selected, selectable) {
        (true, _) => ("Selected", "bg-purple-700 text-white cursor-default", "Selected"),
        (false, true) => (
            "Select This Skip",
            "bg-purple-100 text-purple-700 hover:bg-purple-200 cursor-pointer",
            "Select this skip",
        ),
        (false, false) => (
            "Select This Skip",
            "bg-gray-500 text-gray-300 cursor-not-allowed",
            "Skip option not selectable due to warnings",
        ),
    };

    rsx! {
        div {
            class: "skip-card relative flex flex-col justify-between rounded-xl border-2 bg-gray-800 p-4 shadow-md {frame}",
            title: "{title}",
            onclick: move |_| {
                if selectable {
                    on_activate.call(id);
                }
            },
            div { class: "absolute left-2 top-2 z-10 rounded bg-purple-700 px-2 py-1 text-sm font-bold text-white",
                "{card.skip.size} Yards"
            }
            if !card.info.warnings.is_empty() {
                div { class: "warning-anchor absolute left-1/2 top-2 z-10 -translate-x-1/2",
                    div { class: "flex h-6 w-6 items-center justify-center rounded-full bg-yellow-300 text-sm", "⚠️" }
                    div { class: "warning-tooltip absolute left-1/2 top-8 z-20 -translate-x-1/2 whitespace-nowrap rounded border border-gray-700 bg-gray-900 p-2 text-sm shadow-lg",
                        for warning in card.info.warnings.iter() {
                            div { class: "mb-1 rounded px-2 py-1 last:mb-0 {warning_class(warning.severity)}",
                                "{warning.text}"
                            }
                        }
                    }
                }
            }
            img {
                class: "mb-4 h-auto w-full rounded",
                src: "{image_url}",
                alt: "{card.skip.size} Yard Skip",
            }
            h2 { class: "mb-2 text-xl font-bold", "{card.skip.size} Yard Skip" }
            p { class: "mb-2 text-gray-400", "{card.skip.hire_period_days} day hire period" }
            p { class: "mb-4 text-lg font-bold text-blue-500", "{price}" }
            button {
                r#type: "button",
                class: "w-full rounded-lg py-2 font-semibold transition {button_class}",
                disabled: !selectable,
                "aria-label": "{aria_label}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    if selectable {
                        on_activate.call(id);
                    }
                },
                "{button_label}"
            }
        }
    }
}
