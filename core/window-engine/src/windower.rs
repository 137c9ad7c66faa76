//! FILENAME: core/window-engine/src/windower.rs
//! Windower - Maps a scroll position to the rows that must be materialized.
//!
//! All rows share one fixed height, so every offset is `index * row_height`
//! and the visible range falls out of two divisions:
//! - first_visible = floor(scroll_offset / row_height)
//! - visible_count = ceil(viewport_height / row_height)
//! The range is then widened by `overscan` rows on each side and clamped to
//! `[0, total_rows]`.

use serde::Serialize;

use crate::definition::{check_row_height, check_scroll_offset, check_viewport_height};
use crate::error::WindowError;

/// A materialized row: its index in the row plan and vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualRow {
    pub index: usize,
    /// Absolute top offset in pixels.
    pub start: f64,
    pub size: f64,
}

impl VirtualRow {
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}

/// Contiguous range `[start_index, end_index)` of rows to render.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize,
    pub rows: Vec<VirtualRow>,
    /// Height of the full scrollable content.
    pub total_height: f64,
}

impl VisibleWindow {
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// Where a row should land in the viewport when scrolling to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    Center,
    End,
    /// Scroll the minimum amount needed to make the row fully visible.
    #[default]
    Auto,
}

/// Computes the rows to materialize for the given scroll state.
pub fn visible_range(
    total_rows: usize,
    row_height: f64,
    viewport_height: f64,
    scroll_offset: f64,
    overscan: usize,
) -> Result<VisibleWindow, WindowError> {
    check_row_height(row_height)?;
    check_viewport_height(viewport_height)?;
    check_scroll_offset(scroll_offset)?;

    let first_visible = (scroll_offset / row_height).floor() as usize;
    let visible_count = (viewport_height / row_height).ceil() as usize;

    let end_index = first_visible
        .saturating_add(visible_count)
        .saturating_add(overscan)
        .min(total_rows);
    // Scrolled past the content: keep the range empty rather than inverted.
    let start_index = first_visible.saturating_sub(overscan).min(end_index);

    let rows = (start_index..end_index)
        .map(|index| VirtualRow {
            index,
            start: index as f64 * row_height,
            size: row_height,
        })
        .collect();

    Ok(VisibleWindow {
        start_index,
        end_index,
        rows,
        total_height: total_rows as f64 * row_height,
    })
}

/// Largest scroll offset a container of `viewport_height` can reach.
pub fn max_scroll_offset(total_rows: usize, row_height: f64, viewport_height: f64) -> f64 {
    (total_rows as f64 * row_height - viewport_height).max(0.0)
}

/// Scroll offset that brings row `index` into view with the given alignment,
/// clamped to `[0, max_scroll_offset]`.
pub fn scroll_offset_for_row(
    index: usize,
    align: Align,
    total_rows: usize,
    row_height: f64,
    viewport_height: f64,
    current_offset: f64,
) -> Result<f64, WindowError> {
    check_row_height(row_height)?;
    check_viewport_height(viewport_height)?;
    check_scroll_offset(current_offset)?;
    if index >= total_rows {
        return Err(WindowError::RowOutOfRange {
            index,
            total: total_rows,
        });
    }

    let top = index as f64 * row_height;
    let bottom = top + row_height;

    let target = match align {
        Align::Start => top,
        Align::Center => top - (viewport_height - row_height) / 2.0,
        Align::End => bottom - viewport_height,
        Align::Auto => {
            if top < current_offset {
                top
            } else if bottom > current_offset + viewport_height {
                bottom - viewport_height
            } else {
                current_offset
            }
        }
    };

    let max = max_scroll_offset(total_rows, row_height, viewport_height);
    Ok(target.clamp(0.0, max))
}
