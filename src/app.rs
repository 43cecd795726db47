use dioxus::prelude::*;

use crate::{
    domain::{AppState, SkipOption},
    infra::{
        images::ImageResolver,
        skip_api::{InventorySource, SkipApiClient, SkipApiError},
    },
    ui::{
        components::notice::{Notice, NoticeBoard, NoticeStack},
        pages::SkipSelectPage,
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    SelectSkip {},
}

#[component]
pub fn App() -> Element {
    // Loaded in `main` and handed over through the launch context.
    let config = use_context::<AppConfig>();

    let mut state = use_signal(AppState::default);
    use_context_provider(|| state);

    let mut notices = use_signal(NoticeBoard::default);
    use_context_provider(|| notices);

    use_context_provider({
        let config = config.clone();
        move || ImageResolver::from_config(&config)
    });

    // Fires once per launch; filters and selection only touch the snapshot.
    let _inventory = use_resource(move || {
        let config = config.clone();
        async move {
            let result = fetch_configured(&config).await;
            state.with_mut(|st| notices.with_mut(|board| install_inventory(result, st, board)));
        }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        NoticeStack {}
    }
}

async fn fetch_configured(config: &AppConfig) -> Result<Vec<SkipOption>, SkipApiError> {
    let client = SkipApiClient::from_config(config)?;
    tracing::debug!(endpoint = %client.endpoint(), "inventory source ready");
    client.fetch_inventory().await
}

/// Hands a fetch result to the app state. A failure is posted to the board
/// the first time only.
pub(crate) fn install_inventory(
    result: Result<Vec<SkipOption>, SkipApiError>,
    state: &mut AppState,
    board: &mut NoticeBoard,
) {
    if let Some(message) = state.apply_fetch(result) {
        board.post(Notice::FetchFailed(message));
    }
}

#[component]
pub fn SelectSkip() -> Element {
    rsx! { Shell { SkipSelectPage {} } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activation, InventoryStatus, RejectReason, FETCH_ERROR_MESSAGE};
    use crate::infra::skip_api::StaticInventory;

    struct OfflineSource;

    impl InventorySource for OfflineSource {
        async fn fetch_inventory(&self) -> Result<Vec<SkipOption>, SkipApiError> {
            Err(SkipApiError::Decode("connection refused".into()))
        }
    }

    fn skip(id: i64) -> SkipOption {
        SkipOption {
            id,
            size: 6,
            hire_period_days: 14,
            price_before_vat: 305.0,
            transport_cost: None,
            per_tonne_cost: None,
            vat_percent: 20.0,
            postcode: Some("NR32".into()),
            area: None,
            allowed_on_road: true,
            allows_heavy_waste: true,
        }
    }

    #[tokio::test]
    async fn fetched_inventory_reaches_the_controller() {
        let source = StaticInventory::new(vec![skip(1), skip(2)]);
        let mut state = AppState::default();
        let mut board = NoticeBoard::default();

        install_inventory(source.fetch_inventory().await, &mut state, &mut board);

        assert_eq!(state.status, InventoryStatus::Ready);
        assert_eq!(state.controller.skips().len(), 2);
        assert!(board.is_empty());
        assert_eq!(state.controller.activate(2), Activation::Selected(2));
    }

    #[tokio::test]
    async fn failure_is_posted_once_and_the_page_keeps_working() {
        let source = OfflineSource;
        let mut state = AppState::default();
        let mut board = NoticeBoard::default();

        install_inventory(source.fetch_inventory().await, &mut state, &mut board);
        install_inventory(source.fetch_inventory().await, &mut state, &mut board);

        assert_eq!(state.status.error(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(
            board.entries().iter().map(|(_, n)| n.clone()).collect::<Vec<_>>(),
            vec![Notice::FetchFailed(FETCH_ERROR_MESSAGE.to_string())]
        );
        assert!(state.controller.cards().is_empty());
        assert_eq!(
            state.controller.activate(1),
            Activation::Rejected(RejectReason::UnknownSkip)
        );
    }

    #[tokio::test]
    async fn failure_after_success_empties_the_inventory() {
        let mut state = AppState::default();
        let mut board = NoticeBoard::default();

        let loaded = StaticInventory::new(vec![skip(1)]).fetch_inventory().await;
        install_inventory(loaded, &mut state, &mut board);
        install_inventory(OfflineSource.fetch_inventory().await, &mut state, &mut board);

        assert!(state.controller.skips().is_empty());
        assert_eq!(board.entries().len(), 1);
    }

    #[tokio::test]
    async fn missing_api_url_is_a_fetch_failure() {
        let mut state = AppState::default();
        let mut board = NoticeBoard::default();

        let result = fetch_configured(&AppConfig::default()).await;
        assert!(matches!(result, Err(SkipApiError::MissingUrl)));
        install_inventory(result, &mut state, &mut board);

        assert_eq!(state.status.error(), Some(FETCH_ERROR_MESSAGE));
        assert!(!board.is_empty());
    }
}
