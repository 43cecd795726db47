use dioxus::prelude::*;

use crate::domain::{price_range, Activation, AppState, SelectionState};
use crate::ui::components::{
    action_bar::ActionBar,
    filter_panel::FilterPanel,
    notice::{post_notice, Notice, NoticeBoard},
    skip_card::SkipOptionCard,
};

#[component]
pub fn SkipSelectPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let notices = use_context::<Signal<NoticeBoard>>();
    let navigator = use_navigator();

    let (status, cards, selected, range) = state.with(|st| {
        (
            st.status.clone(),
            st.controller.cards(),
            st.controller.current_selection().cloned(),
            price_range(st.controller.skips()),
        )
    });

    if status.is_loading() {
        return rsx! {
            div { class: "flex min-h-[50vh] items-center justify-center",
                p { class: "text-lg text-gray-400", "Loading skip options..." }
            }
        };
    }

    let error = status.error().map(str::to_string);
    let no_matches = error.is_none() && cards.is_empty();

    let on_activate = move |id: i64| {
        let outcome = state.with_mut(|st| st.controller.activate(id));
        if let Activation::Selected(id) = outcome {
            tracing::debug!(id, "skip selected");
        }
    };

    rsx! {
        FilterPanel { price_range: range, no_matches }

        if let Some(message) = error {
            p { class: "mb-8 text-center text-red-400", "{message}" }
        }

        div { class: "mx-auto grid max-w-7xl grid-cols-1 gap-8 px-4 pb-8 sm:grid-cols-2 lg:grid-cols-3",
            for card in cards {
                SkipOptionCard {
                    key: "{card.skip.id}",
                    card,
                    on_activate,
                }
            }
        }

        ActionBar {
            selected,
            on_back: move |_| {
                let selection = state.with(|st| st.controller.selection());
                if let SelectionState::Selected(id) = selection {
                    tracing::debug!(id, "clearing selection");
                    state.with_mut(|st| st.controller.clear_selection());
                    post_notice(notices, Notice::SelectionCleared);
                } else {
                    navigator.go_back();
                }
            },
            on_continue: move |id: i64| {
                tracing::info!(id, "continuing with skip");
                post_notice(notices, Notice::Continuing(id));
            },
        }
        div { class: "action-bar-spacer" }
    }
}
