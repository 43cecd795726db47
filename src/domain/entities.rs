use serde::{Deserialize, Serialize};

/// Yard sizes the catalogue normally offers. Used for filter choices and image lookup.
pub const KNOWN_SKIP_SIZES: [u32; 10] = [4, 5, 6, 8, 10, 12, 14, 16, 20, 40];

/// Minimum hire durations (in weeks) offered by the filter panel.
pub const DURATION_WEEK_OPTIONS: [u32; 4] = [1, 2, 3, 4];

/// A skip offered for hire, as delivered by the inventory source.
///
/// The total price is never stored here; see [`crate::domain::pricing::total_price`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkipOption {
    pub id: i64,
    /// Capacity in cubic yards.
    pub size: u32,
    pub hire_period_days: u32,
    pub price_before_vat: f64,
    #[serde(default)]
    pub transport_cost: Option<f64>,
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,
    /// Percentage, e.g. `20.0` for 20%.
    #[serde(default)]
    pub vat_percent: f64,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl SkipOption {
    /// "NR32 - Lowestoft", "NR32", or "N/A" when no location is known.
    pub fn location_label(&self) -> String {
        let postcode = self
            .postcode
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("N/A");
        match self.area.as_deref().filter(|a| !a.is_empty()) {
            Some(area) => format!("{postcode} - {area}"),
            None => postcode.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// Blocks selection.
    Red,
    /// Advisory only.
    Yellow,
}

impl WarningSeverity {
    pub fn is_blocking(&self) -> bool {
        matches!(self, WarningSeverity::Red)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub text: String,
    pub severity: WarningSeverity,
}

impl Warning {
    pub fn new(text: impl Into<String>, severity: WarningSeverity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkipSelectionInfo {
    /// In rule order: heavy waste first, then road placement.
    pub warnings: Vec<Warning>,
    pub is_selectable: bool,
    pub has_red_warnings: bool,
}
