//! Skip pricing, selection and filtering rules live here.

pub mod app_state;
pub mod controller;
pub mod entities;
pub mod filter;
pub mod pricing;
pub mod selection;

#[allow(unused_imports)]
pub use app_state::{AppState, InventoryStatus, FETCH_ERROR_MESSAGE};
#[allow(unused_imports)]
pub use controller::{
    current_selection, Activation, RejectReason, SelectionController, SelectionState, SkipCard,
};
#[allow(unused_imports)]
pub use entities::{
    SkipOption, SkipSelectionInfo, Warning, WarningSeverity, DURATION_WEEK_OPTIONS,
    KNOWN_SKIP_SIZES,
};
#[allow(unused_imports)]
pub use filter::{
    choice_to_constraint, filter_skips, price_range, sort_skips, PriceRange, SkipFilter,
    SkipFilterUpdate, SkipSort,
};
#[allow(unused_imports)]
pub use pricing::{format_price, total_price, PriceBreakdown};
#[allow(unused_imports)]
pub use selection::evaluate;
