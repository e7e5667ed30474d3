//! Validation for the `[splitter]` section.

use sash_common::{Orientation, PaneSize};

use crate::schema::SashConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_splitter(errors: &mut Vec<String>, config: &SashConfig) {
    let splitter = &config.splitter;

    if let Err(e) = splitter.orientation() {
        errors.push(e.to_string());
    }
    validate_range_f64(errors, "splitter.divider_size", splitter.divider_size, 0.0, 64.0);
    validate_range(errors, "splitter.panes", splitter.panes, 1, 32);

    for (i, min) in splitter.min_sizes.iter().enumerate() {
        if !min.is_finite() || *min < 0.0 {
            errors.push(format!("splitter.min_sizes[{i}] = {min} must be a non-negative length"));
        }
    }

    if !splitter.initial_sizes.is_empty() {
        if splitter.initial_sizes.len() != splitter.panes as usize {
            errors.push(format!(
                "splitter.initial_sizes has {} entries but splitter.panes = {}",
                splitter.initial_sizes.len(),
                splitter.panes
            ));
        }
        for (i, size) in splitter.initial_sizes.iter().enumerate() {
            if !size.is_valid() {
                errors.push(format!("splitter.initial_sizes[{i}] = {size} is not a valid size"));
            }
        }
        validate_percent_fill(errors, config);
    }
}

/// Tolerance, in container pixels, for an all-percent `initial_sizes`
/// sequence to count as filling the container.
const PERCENT_FILL_TOLERANCE: f64 = 0.5;

/// An all-percent `initial_sizes` must add up to the share of the
/// container left over after the dividers.
fn validate_percent_fill(errors: &mut Vec<String>, config: &SashConfig) {
    let splitter = &config.splitter;
    if splitter.initial_sizes.len() != splitter.panes as usize
        || !splitter.divider_size.is_finite()
    {
        return;
    }
    let Ok(orientation) = splitter.orientation() else {
        return;
    };

    let mut sum = 0.0;
    for size in &splitter.initial_sizes {
        match size {
            PaneSize::Percent(p) if size.is_valid() => sum += p,
            _ => return,
        }
    }

    let extent = match orientation {
        Orientation::Horizontal => config.container.height,
        Orientation::Vertical => config.container.width,
    };
    if !extent.is_finite() || extent <= 0.0 {
        return;
    }

    let dividers = splitter.panes.saturating_sub(1) as f64 * splitter.divider_size;
    let expected = (extent - dividers).max(0.0) / extent * 100.0;
    if (sum - expected).abs() * extent / 100.0 > PERCENT_FILL_TOLERANCE {
        errors.push(format!(
            "splitter.initial_sizes add up to {sum}% but must fill {expected}% of the container"
        ));
    }
}
