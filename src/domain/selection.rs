use super::entities::{SkipOption, SkipSelectionInfo, Warning, WarningSeverity};

pub const HEAVY_WASTE_WARNING: &str = "Not suitable for heavy waste";
pub const ROAD_WARNING: &str = "Not allowed on the road";

/// Warnings and selectability for a skip.
///
/// Heavy waste is checked before road placement so warnings always come out in
/// that order. Only red warnings block selection.
pub fn evaluate(skip: &SkipOption) -> SkipSelectionInfo {
    let mut warnings = Vec::new();

    if !skip.allows_heavy_waste {
        warnings.push(Warning::new(HEAVY_WASTE_WARNING, WarningSeverity::Red));
    }
    if !skip.allowed_on_road {
        warnings.push(Warning::new(ROAD_WARNING, WarningSeverity::Yellow));
    }

    let has_red_warnings = warnings.iter().any(|w| w.severity.is_blocking());

    SkipSelectionInfo {
        warnings,
        is_selectable: !has_red_warnings,
        has_red_warnings,
    }
}
