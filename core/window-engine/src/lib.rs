//! FILENAME: core/window-engine/src/lib.rs
//! Windowed rendering engine for grouped, collapsible tables.
//!
//! Flattens records grouped by a key into one addressable row sequence,
//! maps the scroll position to the rows that must be materialized, and keeps
//! row offsets stable as groups expand and collapse. It depends on `dataset`
//! for the record model; the renderer is an external collaborator.
//!
//! Layers:
//! - `definition`: Serializable configuration (row height, overscan, viewport)
//! - `group_index`: Records bucketed by group key in first-seen order
//! - `expansion`: Which groups are expanded
//! - `row_plan`: The flattened row sequence and its memo cache
//! - `windower`: Scroll position -> visible row range
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `session`: Ordered event processing (HOW state moves)

pub mod logging;

pub mod definition;
pub mod error;
pub mod expansion;
pub mod group_index;
pub mod row_plan;
pub mod session;
pub mod view;
pub mod windower;

pub use definition::{WindowConfig, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT};
pub use error::WindowError;
pub use expansion::ExpansionState;
pub use group_index::{Group, GroupIndex};
pub use row_plan::{DisplayRow, RowPlan, RowPlanCache};
pub use session::{ViewEvent, ViewSession, ViewSnapshot};
pub use view::{ViewRow, ViewRowContent, WindowedView};
pub use windower::{max_scroll_offset, scroll_offset_for_row, visible_range, Align, VirtualRow, VisibleWindow};

pub use dataset::{GroupField, GroupKey, Record, RecordIndex};
