//! FILENAME: core/window-engine/src/view.rs
//! Windowed View - Renderable output for the frontend.
//!
//! Joins the row plan with the visible window so the renderer receives only
//! the rows it has to draw, each already placed and resolved to its header
//! data or its record.

use dataset::{GroupKey, Record, RecordIndex};
use serde::Serialize;

use crate::group_index::GroupIndex;
use crate::row_plan::{DisplayRow, RowPlan};
use crate::windower::VisibleWindow;

/// What a rendered row shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewRowContent {
    #[serde(rename_all = "camelCase")]
    GroupHeader {
        key: GroupKey,
        expanded: bool,
        member_count: usize,
    },
    #[serde(rename_all = "camelCase")]
    Item {
        record_index: RecordIndex,
        record: Record,
    },
}

/// A single placed row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRow {
    /// Index in the row plan; stable for as long as the plan is unchanged.
    pub index: usize,
    pub top: f64,
    pub height: f64,
    pub content: ViewRowContent,
}

/// The rows to draw for one render cycle plus sizing of the scroll area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowedView {
    pub rows: Vec<ViewRow>,
    pub start_index: usize,
    pub end_index: usize,
    pub total_row_count: usize,
    pub total_height: f64,
    pub scroll_offset: f64,
    /// Indicates the view holds only part of the row plan.
    pub is_windowed: bool,
    /// Expansion version the underlying plan was built from.
    pub version: u64,
    /// Group-index generation the plan was built from; changes on reload.
    /// A renderer keys its cache on (`index_generation`, `version`).
    pub index_generation: u64,
}

impl WindowedView {
    /// Resolves each windowed row against the plan and the index.
    pub fn build(
        index: &GroupIndex,
        plan: &RowPlan,
        window: &VisibleWindow,
        scroll_offset: f64,
    ) -> Self {
        let rows = window
            .rows
            .iter()
            .filter_map(|virtual_row| {
                let content = match plan.get(virtual_row.index)? {
                    DisplayRow::Group {
                        key,
                        expanded,
                        member_count,
                    } => ViewRowContent::GroupHeader {
                        key: key.clone(),
                        expanded: *expanded,
                        member_count: *member_count,
                    },
                    DisplayRow::Item { record } => ViewRowContent::Item {
                        record_index: *record,
                        record: index.record(*record)?.clone(),
                    },
                };
                Some(ViewRow {
                    index: virtual_row.index,
                    top: virtual_row.start,
                    height: virtual_row.size,
                    content,
                })
            })
            .collect();

        WindowedView {
            rows,
            start_index: window.start_index,
            end_index: window.end_index,
            total_row_count: plan.len(),
            total_height: window.total_height,
            scroll_offset,
            is_windowed: window.len() < plan.len(),
            version: plan.expansion_version(),
            index_generation: plan.index_generation(),
        }
    }
}
