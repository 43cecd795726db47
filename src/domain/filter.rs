//! Skip inventory filtering and sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::entities::SkipOption;
use super::pricing::{total_price, vat_multiplier};

/// User filter criteria. `None` means no constraint.
///
/// Prices are VAT-inclusive. `0` is a real value here: callers that present an
/// "All" choice must map it to `None` (see [`choice_to_constraint`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkipFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_size: Option<u32>,
    pub min_duration_weeks: Option<u32>,
}

/// Partial update for [`SkipFilter`].
///
/// Outer `None` leaves a field alone, `Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkipFilterUpdate {
    pub min_price: Option<Option<f64>>,
    pub max_price: Option<Option<f64>>,
    pub min_size: Option<Option<u32>>,
    pub min_duration_weeks: Option<Option<u32>>,
}

impl SkipFilterUpdate {
    pub fn min_price(value: Option<f64>) -> Self {
        Self {
            min_price: Some(value),
            ..Self::default()
        }
    }

    pub fn max_price(value: Option<f64>) -> Self {
        Self {
            max_price: Some(value),
            ..Self::default()
        }
    }

    pub fn min_size(value: Option<u32>) -> Self {
        Self {
            min_size: Some(value),
            ..Self::default()
        }
    }

    pub fn min_duration_weeks(value: Option<u32>) -> Self {
        Self {
            min_duration_weeks: Some(value),
            ..Self::default()
        }
    }
}

impl SkipFilter {
    pub fn apply(&mut self, update: SkipFilterUpdate) {
        if let Some(value) = update.min_price {
            self.min_price = value;
        }
        if let Some(value) = update.max_price {
            self.max_price = value;
        }
        if let Some(value) = update.min_size {
            self.min_size = value;
        }
        if let Some(value) = update.min_duration_weeks {
            self.min_duration_weeks = value;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_size.is_none()
            && self.min_duration_weeks.is_none()
    }

    pub fn matches(&self, skip: &SkipOption) -> bool {
        let price_with_vat = total_price(skip);

        self.min_price.is_none_or(|min| price_with_vat >= min)
            && self.max_price.is_none_or(|max| price_with_vat <= max)
            && self.min_size.is_none_or(|min_size| skip.size >= min_size)
            && self.min_duration_weeks.is_none_or(|weeks| {
                u64::from(skip.hire_period_days) >= u64::from(weeks) * 7
            })
    }
}

/// Maps an "All" choice (`0`) from a size or duration picker to no constraint.
pub fn choice_to_constraint(choice: u32) -> Option<u32> {
    (choice > 0).then_some(choice)
}

/// Skips matching every defined criterion, in input order.
pub fn filter_skips(skips: &[SkipOption], filter: &SkipFilter) -> Vec<SkipOption> {
    skips
        .iter()
        .filter(|skip| filter.matches(skip))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// VAT-inclusive base price range, ignoring transport and per-tonne surcharges.
///
/// Only meant for range hints in the filter panel. Returns `None` for an empty
/// inventory.
pub fn price_range(skips: &[SkipOption]) -> Option<PriceRange> {
    skips
        .iter()
        .map(|skip| skip.price_before_vat * vat_multiplier(skip.vat_percent))
        .fold(None, |range, price| match range {
            None => Some(PriceRange { min: price, max: price }),
            Some(PriceRange { min, max }) => Some(PriceRange {
                min: min.min(price),
                max: max.max(price),
            }),
        })
}

/// Sorting options for the skip grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipSort {
    /// Order delivered by the inventory source.
    #[default]
    Inventory,
    PriceLowHigh,
    PriceHighLow,
    Size,
    HirePeriod,
}

impl SkipSort {
    pub const ALL: [SkipSort; 5] = [
        SkipSort::Inventory,
        SkipSort::PriceLowHigh,
        SkipSort::PriceHighLow,
        SkipSort::Size,
        SkipSort::HirePeriod,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inventory => "Recommended",
            Self::PriceLowHigh => "Price: low to high",
            Self::PriceHighLow => "Price: high to low",
            Self::Size => "Size",
            Self::HirePeriod => "Hire period",
        }
    }

    /// Stable key for `<select>` values.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::PriceLowHigh => "price-asc",
            Self::PriceHighLow => "price-desc",
            Self::Size => "size",
            Self::HirePeriod => "hire-period",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.key() == key)
    }
}

/// Stable sort; ties keep inventory order.
pub fn sort_skips(skips: &mut [SkipOption], sort: SkipSort) {
    match sort {
        SkipSort::Inventory => {}
        SkipSort::PriceLowHigh => skips.sort_by(|a, b| compare_price(a, b)),
        SkipSort::PriceHighLow => skips.sort_by(|a, b| compare_price(b, a)),
        SkipSort::Size => skips.sort_by_key(|skip| skip.size),
        SkipSort::HirePeriod => skips.sort_by_key(|skip| skip.hire_period_days),
    }
}

fn compare_price(a: &SkipOption, b: &SkipOption) -> Ordering {
    total_price(a)
        .partial_cmp(&total_price(b))
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(id: i64, size: u32, days: u32, price: f64) -> SkipOption {
        SkipOption {
            id,
            size,
            hire_period_days: days,
            price_before_vat: price,
            transport_cost: None,
            per_tonne_cost: None,
            vat_percent: 20.0,
            postcode: None,
            area: None,
            allowed_on_road: true,
            allows_heavy_waste: true,
        }
    }

    fn inventory() -> Vec<SkipOption> {
        vec![
            skip(1, 4, 7, 100.0),
            skip(2, 6, 14, 200.0),
            skip(3, 8, 14, 250.0),
            skip(4, 10, 21, 300.0),
            skip(5, 40, 28, 800.0),
        ]
    }

    fn ids(skips: &[SkipOption]) -> Vec<i64> {
        skips.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let skips = inventory();
        assert_eq!(filter_skips(&skips, &SkipFilter::default()), skips);
    }

    #[test]
    fn min_size_scenario() {
        let skips = vec![skip(1, 6, 14, 100.0), skip(2, 10, 14, 100.0)];
        let filter = SkipFilter {
            min_size: Some(8),
            ..SkipFilter::default()
        };
        assert_eq!(ids(&filter_skips(&skips, &filter)), vec![2]);
    }

    #[test]
    fn price_bounds_use_vat_inclusive_total() {
        let filter = SkipFilter {
            min_price: Some(239.99),
            max_price: Some(360.01),
            ..SkipFilter::default()
        };
        // 200 * 1.2 = 240, 250 * 1.2 = 300, 300 * 1.2 = 360
        assert_eq!(ids(&filter_skips(&inventory(), &filter)), vec![2, 3, 4]);
    }

    #[test]
    fn min_price_holds_for_every_result() {
        let filter = SkipFilter {
            min_price: Some(300.0),
            ..SkipFilter::default()
        };
        let result = filter_skips(&inventory(), &filter);
        assert!(!result.is_empty());
        assert!(result.iter().all(|s| total_price(s) >= 300.0));
    }

    #[test]
    fn surcharges_count_towards_price_filters() {
        let mut s = skip(9, 6, 14, 200.0);
        s.transport_cost = Some(50.0);
        let filter = SkipFilter {
            max_price: Some(250.0),
            ..SkipFilter::default()
        };
        assert!(filter_skips(&[s], &filter).is_empty());
    }

    #[test]
    fn duration_is_compared_in_days() {
        let filter = SkipFilter {
            min_duration_weeks: Some(2),
            ..SkipFilter::default()
        };
        assert_eq!(ids(&filter_skips(&inventory(), &filter)), vec![2, 3, 4, 5]);
    }

    #[test]
    fn zero_is_a_real_constraint_inside_the_filter() {
        let filter = SkipFilter {
            min_size: Some(0),
            min_duration_weeks: Some(0),
            ..SkipFilter::default()
        };
        assert_eq!(filter_skips(&inventory(), &filter).len(), 5);
        assert!(!filter.is_empty());
    }

    #[test]
    fn all_choice_maps_to_no_constraint() {
        assert_eq!(choice_to_constraint(0), None);
        assert_eq!(choice_to_constraint(8), Some(8));

        let mut filter = SkipFilter::default();
        filter.apply(SkipFilterUpdate::min_size(choice_to_constraint(0)));
        filter.apply(SkipFilterUpdate::min_duration_weeks(choice_to_constraint(0)));
        assert!(filter.is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let filter = SkipFilter {
            min_price: Some(200.0),
            min_size: Some(6),
            ..SkipFilter::default()
        };
        let once = filter_skips(&inventory(), &filter);
        let twice = filter_skips(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let filter = SkipFilter {
            min_size: Some(100),
            ..SkipFilter::default()
        };
        assert!(filter_skips(&inventory(), &filter).is_empty());
        assert!(filter_skips(&[], &filter).is_empty());
    }

    #[test]
    fn apply_merges_and_clears() {
        let mut filter = SkipFilter::default();
        filter.apply(SkipFilterUpdate::min_size(Some(8)));
        filter.apply(SkipFilterUpdate::max_price(Some(500.0)));
        assert_eq!(filter.min_size, Some(8));
        assert_eq!(filter.max_price, Some(500.0));

        filter.apply(SkipFilterUpdate::min_size(None));
        assert_eq!(filter.min_size, None);
        assert_eq!(filter.max_price, Some(500.0));
    }

    #[test]
    fn price_range_ignores_surcharges() {
        let mut skips = inventory();
        skips[0].transport_cost = Some(1000.0);
        let range = price_range(&skips).expect("non-empty inventory");
        assert!((range.min - 120.0).abs() < 1e-9);
        assert!((range.max - 960.0).abs() < 1e-9);
    }

    #[test]
    fn price_range_of_nothing_is_none() {
        assert_eq!(price_range(&[]), None);
    }

    #[test]
    fn sorts_are_stable() {
        let mut skips = inventory();
        skips.push(skip(6, 8, 7, 250.0));

        sort_skips(&mut skips, SkipSort::PriceHighLow);
        assert_eq!(ids(&skips), vec![5, 4, 3, 6, 2, 1]);

        sort_skips(&mut skips, SkipSort::Size);
        assert_eq!(ids(&skips), vec![1, 2, 3, 6, 4, 5]);

        sort_skips(&mut skips, SkipSort::HirePeriod);
        assert_eq!(ids(&skips), vec![1, 6, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_keys_round_trip() {
        for sort in SkipSort::ALL {
            assert_eq!(SkipSort::from_key(sort.key()), Some(sort));
        }
        assert_eq!(SkipSort::from_key("bogus"), None);
    }

    #[test]
    fn every_bound_is_inclusive() {
        let exact = SkipOption {
            vat_percent: 0.0,
            ..skip(9, 6, 14, 200.0)
        };
        let filter = SkipFilter {
            min_price: Some(200.0),
            max_price: Some(200.0),
            min_size: Some(6),
            min_duration_weeks: Some(2),
        };
        assert!(filter.matches(&exact));

        let short = SkipOption {
            hire_period_days: 13,
            ..exact.clone()
        };
        assert!(!filter.matches(&short));
    }

    #[test]
    fn fresh_filter_is_empty_until_a_bound_is_set() {
        let mut filter = SkipFilter::default();
        assert!(filter.is_empty());
        filter.apply(SkipFilterUpdate::min_size(Some(4)));
        assert!(!filter.is_empty());
        filter.apply(SkipFilterUpdate::min_size(None));
        assert!(filter.is_empty());
    }
}
