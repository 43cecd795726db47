//! Selection state over a fetched skip inventory.
//!
//! The controller owns the filter criteria and the selected id. Selection is
//! held as an id and resolved against the full inventory, so it survives filter
//! changes and hides nothing when a selected skip is filtered out of view.

use super::entities::{SkipOption, SkipSelectionInfo};
use super::filter::{filter_skips, sort_skips, SkipFilter, SkipFilterUpdate, SkipSort};
use super::pricing::total_price;
use super::selection::evaluate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    NoneSelected,
    Selected(i64),
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<i64> {
        match self {
            SelectionState::NoneSelected => None,
            SelectionState::Selected(id) => Some(*id),
        }
    }
}

/// Result of [`SelectionController::activate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Selected(i64),
    Deselected(i64),
    Rejected(RejectReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The skip carries a blocking warning.
    NotSelectable,
    /// No skip with that id in the current inventory.
    UnknownSkip,
}

/// Everything a skip card needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct SkipCard {
    pub skip: SkipOption,
    pub total_price: f64,
    pub info: SkipSelectionInfo,
    pub is_selected: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionController {
    skips: Vec<SkipOption>,
    filters: SkipFilter,
    sort: SkipSort,
    selection: SelectionState,
}

impl SelectionController {
    pub fn skips(&self) -> &[SkipOption] {
        &self.skips
    }

    pub fn filters(&self) -> &SkipFilter {
        &self.filters
    }

    pub fn sort(&self) -> SkipSort {
        self.sort
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selection.selected_id()
    }

    /// Swaps in a new inventory snapshot. The selected id is kept even if it
    /// no longer resolves; [`Self::current_selection`] then yields `None`.
    pub fn replace_inventory(&mut self, skips: Vec<SkipOption>) {
        self.skips = skips;
    }

    pub fn set_filter(&mut self, update: SkipFilterUpdate) {
        self.filters.apply(update);
    }

    pub fn reset_filters(&mut self) {
        self.filters = SkipFilter::default();
    }

    pub fn set_sort(&mut self, sort: SkipSort) {
        self.sort = sort;
    }

    /// Toggles selection of `id`.
    ///
    /// Re-activating the selected skip clears the selection. Unknown ids and
    /// skips with a blocking warning are rejected without touching state.
    pub fn activate(&mut self, id: i64) -> Activation {
        if self.selection == SelectionState::Selected(id) {
            self.selection = SelectionState::NoneSelected;
            return Activation::Deselected(id);
        }

        let Some(skip) = self.skips.iter().find(|skip| skip.id == id) else {
            tracing::debug!(id, "ignoring activation of unknown skip");
            return Activation::Rejected(RejectReason::UnknownSkip);
        };

        if !evaluate(skip).is_selectable {
            tracing::debug!(id, "ignoring activation of non-selectable skip");
            return Activation::Rejected(RejectReason::NotSelectable);
        }

        self.selection = SelectionState::Selected(id);
        Activation::Selected(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection = SelectionState::NoneSelected;
    }

    /// Filtered and sorted view of the inventory.
    pub fn visible_skips(&self) -> Vec<SkipOption> {
        let mut visible = filter_skips(&self.skips, &self.filters);
        sort_skips(&mut visible, self.sort);
        visible
    }

    pub fn current_selection(&self) -> Option<&SkipOption> {
        current_selection(&self.skips, self.selected_id())
    }

    /// Cards for the visible skips.
    pub fn cards(&self) -> Vec<SkipCard> {
        let selected = self.selected_id();
        self.visible_skips()
            .into_iter()
            .map(|skip| SkipCard {
                total_price: total_price(&skip),
                info: evaluate(&skip),
                is_selected: selected == Some(skip.id),
                skip,
            })
            .collect()
    }
}

/// Looks up the selected skip in the full, unfiltered inventory.
pub fn current_selection(skips: &[SkipOption], selected_id: Option<i64>) -> Option<&SkipOption> {
    let id = selected_id?;
    skips.iter().find(|skip| skip.id == id)
}
