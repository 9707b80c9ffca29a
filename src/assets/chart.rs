//! Precondition check for the regime chart image.
//!
//! The chart is produced offline. This only verifies it is in place before
//! pages are served or rendered, so a missing chart is reported once up front
//! instead of silently on every request.

use std::path::Path;

use super::CHART;

/// Outcome of [`ensure_chart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStatus {
    /// Chart file exists and is non-empty.
    Present,
    /// Chart file is missing or empty; pages fall back to the placeholder.
    Missing,
}

/// Check that the chart image exists in `assets_dir`.
///
/// Never fails. A missing chart only logs a warning.
pub fn ensure_chart(assets_dir: &Path) -> ChartStatus {
    let path = assets_dir.join(CHART.file_name);

    let present = std::fs::metadata(&path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false);

    if present {
        tracing::info!("Chart found at {}", path.display());
        ChartStatus::Present
    } else {
        tracing::warn!(
            "Chart not found at {}; pages will use the placeholder image",
            path.display()
        );
        ChartStatus::Missing
    }
}
