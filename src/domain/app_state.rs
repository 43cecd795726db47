use std::fmt::Display;

use super::controller::SelectionController;
use super::entities::SkipOption;

/// Shown once when the inventory could not be loaded.
pub const FETCH_ERROR_MESSAGE: &str = "Unable to fetch skip options. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InventoryStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl InventoryStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, InventoryStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            InventoryStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub controller: SelectionController,
    pub status: InventoryStatus,
}

impl AppState {
    /// Installs the result of the single inventory fetch.
    ///
    /// On failure the controller keeps working over an empty inventory.
    /// Returns the user-facing message the first time a failure is applied.
    pub fn apply_fetch<E: Display>(&mut self, result: Result<Vec<SkipOption>, E>) -> Option<String> {
        match result {
            Ok(skips) => {
                tracing::info!(count = skips.len(), "skip inventory loaded");
                self.controller.replace_inventory(skips);
                self.status = InventoryStatus::Ready;
                None
            }
            Err(err) => {
                tracing::error!("error fetching skip options: {err}");
                self.controller.replace_inventory(Vec::new());
                if self.status.error().is_some() {
                    return None;
                }
                self.status = InventoryStatus::Failed(FETCH_ERROR_MESSAGE.to_string());
                Some(FETCH_ERROR_MESSAGE.to_string())
            }
        }
    }
}
