use dioxus::prelude::*;

use crate::domain::{
    choice_to_constraint, format_price, AppState, PriceRange, SkipFilterUpdate, SkipSort,
    DURATION_WEEK_OPTIONS, KNOWN_SKIP_SIZES,
};

const INPUT_CLASS: &str = "rounded border border-gray-700 bg-gray-800 p-2 text-gray-200 focus:outline-none focus:ring-2 focus:ring-purple-600";
const LABEL_CLASS: &str = "mb-1 text-sm font-semibold text-gray-300";

/// Empty input means "no bound"; anything unparsable or negative is ignored.
fn parse_price_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn week_label(weeks: u32) -> String {
    if weeks > 1 {
        format!("{weeks} weeks")
    } else {
        format!("{weeks} week")
    }
}

#[component]
pub fn FilterPanel(price_range: Option<PriceRange>, no_matches: bool) -> Element {
    let mut state = use_context::<Signal<AppState>>();

    // Raw text, so a half-typed price is not overwritten while editing.
    let mut min_price_input = use_signal(String::new);
    let mut max_price_input = use_signal(String::new);

    let (filters, sort) = state.with(|st| (st.controller.filters().clone(), st.controller.sort()));
    let min_size = filters.min_size.unwrap_or(0);
    let min_weeks = filters.min_duration_weeks.unwrap_or(0);
    let nothing_to_reset =
        filters.is_empty() && min_price_input.read().is_empty() && max_price_input.read().is_empty();

    let week_options: Vec<(u32, String)> = DURATION_WEEK_OPTIONS
        .iter()
        .map(|weeks| (*weeks, week_label(*weeks)))
        .collect();
    let sort_key = sort.key();

    rsx! {
        section { class: "mx-auto mb-12 max-w-5xl px-4 text-center",
            h1 { class: "mb-4 bg-gradient-to-r from-purple-400 to-indigo-600 bg-clip-text text-4xl font-extrabold text-transparent drop-shadow-md",
                "Select Your Skip Size"
            }
            p { class: "mb-2 text-gray-400", "Choose the skip size that best fits your needs. All prices include VAT." }
            if let Some(range) = price_range {
                p { class: "mb-8 text-xs text-gray-500",
                    "Skips from {format_price(range.min)} to {format_price(range.max)} before surcharges."
                }
            }

            div { class: "flex flex-wrap items-end justify-center gap-4",
                div { class: "flex w-36 flex-col",
                    label { class: LABEL_CLASS, r#for: "minPrice", "Min Price (£)" }
                    input {
                        id: "minPrice",
                        class: INPUT_CLASS,
                        r#type: "number",
                        min: "0",
                        placeholder: "No min",
                        value: "{min_price_input}",
                        oninput: move |evt| {
                            let raw = evt.value();
                            let bound = parse_price_input(&raw);
                            min_price_input.set(raw);
                            state.with_mut(|st| st.controller.set_filter(SkipFilterUpdate::min_price(bound)));
                        },
                    }
                }
                div { class: "flex w-36 flex-col",
                    label { class: LABEL_CLASS, r#for: "maxPrice", "Max Price (£)" }
                    input {
                        id: "maxPrice",
                        class: INPUT_CLASS,
                        r#type: "number",
                        min: "0",
                        placeholder: "No max",
                        value: "{max_price_input}",
                        oninput: move |evt| {
                            let raw = evt.value();
                            let bound = parse_price_input(&raw);
                            max_price_input.set(raw);
                            state.with_mut(|st| st.controller.set_filter(SkipFilterUpdate::max_price(bound)));
                        },
                    }
                }
                div { class: "flex w-36 flex-col",
                    label { class: LABEL_CLASS, r#for: "minSize", "Min Yard Size" }
                    select {
                        id: "minSize",
                        class: INPUT_CLASS,
                        value: "{min_size}",
                        onchange: move |evt| {
                            let choice = evt.value().parse::<u32>().unwrap_or(0);
                            state.with_mut(|st| {
                                st.controller.set_filter(SkipFilterUpdate::min_size(choice_to_constraint(choice)))
                            });
                        },
                        option { value: "0", selected: min_size == 0, "All" }
                        for size in KNOWN_SKIP_SIZES {
                            option { value: "{size}", selected: min_size == size, "{size} yards" }
                        }
                    }
                }
                div { class: "flex w-36 flex-col",
                    label { class: LABEL_CLASS, r#for: "minDurationWeeks", "Min Duration (weeks)" }
                    select {
                        id: "minDurationWeeks",
                        class: INPUT_CLASS,
                        value: "{min_weeks}",
                        onchange: move |evt| {
                            let choice = evt.value().parse::<u32>().unwrap_or(0);
                            state.with_mut(|st| {
                                st.controller.set_filter(SkipFilterUpdate::min_duration_weeks(choice_to_constraint(choice)))
                            });
                        },
                        option { value: "0", selected: min_weeks == 0, "All" }
                        for (weeks, label) in week_options {
                            option { value: "{weeks}", selected: min_weeks == weeks, "{label}" }
                        }
                    }
                }
                div { class: "flex w-44 flex-col",
                    label { class: LABEL_CLASS, r#for: "sortBy", "Sort by" }
                    select {
                        id: "sortBy",
                        class: INPUT_CLASS,
                        value: "{sort_key}",
                        onchange: move |evt| {
                            let choice = SkipSort::from_key(&evt.value()).unwrap_or_default();
                            state.with_mut(|st| st.controller.set_sort(choice));
                        },
                        for option_sort in SkipSort::ALL {
                            option {
                                value: "{option_sort.key()}",
                                selected: sort == option_sort,
                                "{option_sort.label()}"
                            }
                        }
                    }
                }
                button {
                    class: "rounded-lg border border-gray-700 px-4 py-2 text-sm text-gray-300 transition hover:border-purple-500 hover:text-white disabled:opacity-40",
                    disabled: nothing_to_reset,
                    onclick: move |_| {
                        min_price_input.set(String::new());
                        max_price_input.set(String::new());
                        state.with_mut(|st| st.controller.reset_filters());
                    },
                    "Reset filters"
                }
            }

            if no_matches {
                p { class: "mt-6 italic text-gray-400",
                    "No skips found matching your criteria. Please adjust the filters."
                }
            }
        }
    }
}
