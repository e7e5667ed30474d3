//! Initial proportional pane sizing.

use sash_common::{LayoutError, PaneSize};
use tracing::warn;

/// Thickness of a divider bar when none is configured.
pub const DEFAULT_DIVIDER_SIZE: f64 = 4.0;

/// Size every pane has before the splitter is mounted and measured.
pub const DEFAULT_PANE_SIZE: PaneSize = PaneSize::Pixels(200.0);

/// Slack, in pixels, allowed between configured sizes and the space they
/// must fill before they are rescaled.
pub const FILL_TOLERANCE: f64 = 0.5;

/// Split a container evenly between `pane_count` panes.
///
/// Divider space is taken off the container first; each pane receives an
/// equal share of the rest, expressed as a percentage of the whole
/// container. When the dividers alone do not fit, every pane gets `0%`.
pub fn compute_initial_sizes(
    container_extent: f64,
    pane_count: usize,
    divider_extent: f64,
) -> Result<Vec<PaneSize>, LayoutError> {
    check_inputs(container_extent, pane_count, divider_extent)?;

    let divider_count = (pane_count - 1) as f64;
    let available = (container_extent - divider_count * divider_extent).max(0.0);
    let per_pane = available / pane_count as f64;
    let percent = per_pane / container_extent * 100.0;

    Ok(vec![PaneSize::Percent(percent); pane_count])
}

/// Like [`compute_initial_sizes`], but honours configured starting sizes
/// when there is exactly one per pane. Configured sizes are normalised to
/// percentages of the container; when their lengths do not fill the
/// container minus divider space they are scaled proportionally until they
/// do.
pub fn resolve_initial_sizes(
    configured: Option<&[PaneSize]>,
    container_extent: f64,
    pane_count: usize,
    divider_extent: f64,
) -> Result<Vec<PaneSize>, LayoutError> {
    check_inputs(container_extent, pane_count, divider_extent)?;

    let Some(configured) = configured else {
        return compute_initial_sizes(container_extent, pane_count, divider_extent);
    };

    if configured.len() != pane_count {
        warn!(
            configured = configured.len(),
            panes = pane_count,
            "initial_sizes does not match pane count, using even split"
        );
        return compute_initial_sizes(container_extent, pane_count, divider_extent);
    }

    if configured.iter().any(|size| !size.is_valid()) {
        warn!("initial_sizes contains an unusable entry, using even split");
        return compute_initial_sizes(container_extent, pane_count, divider_extent);
    }

    let lengths: Vec<f64> = configured
        .iter()
        .map(|size| size.to_length(container_extent))
        .collect();
    let total: f64 = lengths.iter().sum();
    let available =
        (container_extent - (pane_count - 1) as f64 * divider_extent).max(0.0);

    if !total.is_finite() || total <= 0.0 {
        warn!("initial_sizes has no length to distribute, using even split");
        return compute_initial_sizes(container_extent, pane_count, divider_extent);
    }

    if (total - available).abs() <= FILL_TOLERANCE {
        return Ok(configured
            .iter()
            .map(|size| PaneSize::Percent(size.to_percent(container_extent).unwrap_or(0.0)))
            .collect());
    }

    warn!(
        total,
        available, "initial_sizes do not fill the container, scaling to fit"
    );
    let scale = available / total;
    Ok(lengths
        .into_iter()
        .map(|length| PaneSize::Percent(length * scale / container_extent * 100.0))
        .collect())
}

fn check_inputs(
    container_extent: f64,
    pane_count: usize,
    divider_extent: f64,
) -> Result<(), LayoutError> {
    if pane_count == 0 {
        return Err(LayoutError::NoPanes);
    }
    if !container_extent.is_finite() || container_extent <= 0.0 {
        return Err(LayoutError::DegenerateContainer(container_extent));
    }
    if !divider_extent.is_finite() || divider_extent < 0.0 {
        return Err(LayoutError::InvalidDividerExtent(divider_extent));
    }
    Ok(())
}
