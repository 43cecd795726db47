//! VAT-inclusive pricing for skips.
//!
//! Nothing here rounds. Rounding to pence happens only in [`format_price`],
//! so filters compare against the exact value.

use super::entities::SkipOption;

/// Total price including surcharges and VAT.
///
/// `(price_before_vat + transport + per_tonne) * (1 + vat / 100)`, with missing
/// surcharges counted as zero. Negative inputs are not rejected here; the
/// inventory boundary drops such records before they reach the domain.
pub fn total_price(skip: &SkipOption) -> f64 {
    subtotal(skip) * vat_multiplier(skip.vat_percent)
}

/// Pre-VAT sum of base price and surcharges.
pub fn subtotal(skip: &SkipOption) -> f64 {
    skip.price_before_vat + skip.transport_cost.unwrap_or(0.0) + skip.per_tonne_cost.unwrap_or(0.0)
}

pub(crate) fn vat_multiplier(vat_percent: f64) -> f64 {
    1.0 + vat_percent / 100.0
}

/// Line items shown in the checkout summary.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub transport_cost: Option<f64>,
    pub per_tonne_cost: Option<f64>,
    pub subtotal: f64,
    pub vat_amount: f64,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn for_skip(skip: &SkipOption) -> Self {
        let subtotal = subtotal(skip);
        Self {
            base_price: skip.price_before_vat,
            // zero surcharges are not worth a line
            transport_cost: skip.transport_cost.filter(|cost| *cost > 0.0),
            per_tonne_cost: skip.per_tonne_cost.filter(|cost| *cost > 0.0),
            subtotal,
            vat_amount: subtotal * (skip.vat_percent / 100.0),
            total: total_price(skip),
        }
    }
}

/// Display form with two decimals, e.g. `£252.00`.
pub fn format_price(amount: f64) -> String {
    format!("£{amount:.2}")
}
