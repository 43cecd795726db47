//! Transient notices shown over the page.

use std::time::Duration;

use dioxus::prelude::*;

/// Success and info notices clear themselves; errors wait for the user.
const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Something the user hears about once.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// The inventory fetch failed; carries the user-facing message.
    FetchFailed(String),
    SelectionCleared,
    /// Continue was pressed for this skip id.
    Continuing(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Notice {
    pub fn tone(&self) -> Tone {
        match self {
            Notice::FetchFailed(_) => Tone::Error,
            Notice::SelectionCleared => Tone::Info,
            Notice::Continuing(_) => Tone::Success,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notice::FetchFailed(message) => message.clone(),
            Notice::SelectionCleared => "Selection cleared.".to_string(),
            Notice::Continuing(id) => format!("Continue with skip ID: {id}"),
        }
    }

    fn auto_dismiss(&self) -> Option<Duration> {
        match self.tone() {
            Tone::Error => None,
            Tone::Info | Tone::Success => Some(AUTO_DISMISS),
        }
    }
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    entries: Vec<(u64, Notice)>,
    next_id: u64,
}

impl NoticeBoard {
    /// Shows `notice` unless an equal one is already up. Returns the new entry's id.
    pub fn post(&mut self, notice: Notice) -> Option<u64> {
        if self.entries.iter().any(|(_, shown)| *shown == notice) {
            return None;
        }
        self.next_id += 1;
        self.entries.push((self.next_id, notice));
        Some(self.next_id)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn entries(&self) -> &[(u64, Notice)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn post_notice(mut board: Signal<NoticeBoard>, notice: Notice) {
    tracing::debug!(?notice, "posting notice");
    board.with_mut(|b| b.post(notice));
}

#[component]
pub fn NoticeStack() -> Element {
    let board = use_context::<Signal<NoticeBoard>>();
    let entries = board.with(|b| b.entries().to_vec());

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pointer-events-none fixed inset-x-0 top-4 z-50 flex justify-center",
            ul { class: "space-y-3",
                for (id, notice) in entries {
                    NoticeCard { key: "{id}", id, notice, board }
                }
            }
        }
    }
}

#[component]
fn NoticeCard(id: u64, notice: Notice, board: Signal<NoticeBoard>) -> Element {
    let lifetime = notice.auto_dismiss();
    use_future(move || async move {
        if let Some(lifetime) = lifetime {
            tokio::time::sleep(lifetime).await;
            board.with_mut(|b| b.dismiss(id));
        }
    });

    let (palette, icon) = match notice.tone() {
        Tone::Info => ("border-sky-500/40 bg-sky-900/80 text-sky-100", "ℹ️"),
        Tone::Success => ("border-emerald-500/40 bg-emerald-900/80 text-emerald-100", "✅"),
        Tone::Error => ("border-red-500/50 bg-red-900/80 text-red-100", "⛔"),
    };
    let text = notice.text();

    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-lg border px-4 py-3 shadow-lg {palette}",
            role: "status",
            span { "{icon}" }
            p { class: "text-sm", "{text}" }
            button {
                class: "ml-3 text-xs text-gray-300 hover:text-white",
                "aria-label": "Dismiss notice",
                onclick: move |_| board.with_mut(|b| b.dismiss(id)),
                "✕"
            }
        }
    }
}
