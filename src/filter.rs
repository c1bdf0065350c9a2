use crate::error::{Error, Result};
use crate::model::Conditions;

const ABBREVIATIONS: &[char] = &['K', 'M', 'B'];

/// Decide whether a video with the displayed `view_count` should be kept.
///
/// Without a `min_view_count` the gate stays closed. Abbreviated counts
/// ("1.2K", "3M") always pass without being compared to the minimum.
pub fn check_conditions(view_count: &str, conditions: &Conditions) -> Result<bool> {
    let Some(min_view_count) = conditions.min_view_count else {
        return Ok(false);
    };

    if view_count.contains(ABBREVIATIONS) {
        return Ok(true);
    }

    let view_count = match view_count.trim() {
        "" => "0",
        trimmed => trimmed,
    };
    let count: u64 = view_count
        .parse()
        .map_err(|_| Error::InvalidViewCount(view_count.to_string()))?;

    Ok(count >= min_view_count)
}
