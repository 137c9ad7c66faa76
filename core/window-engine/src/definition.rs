//! FILENAME: core/window-engine/src/definition.rs
//! Window Definition - The serializable configuration.
//!
//! Describes how the grouped table is laid out in its scroll container.
//! Values are validated once, when a session is created or reconfigured,
//! so the windowing math never has to second-guess its inputs.

use dataset::GroupField;
use serde::{Deserialize, Serialize};

use crate::error::WindowError;

/// Default pixel height of every row (headers and items alike).
pub const DEFAULT_ROW_HEIGHT: f64 = 50.0;

/// Default number of extra rows materialized on each side of the viewport.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Default visible height of the scroll container in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 500.0;

/// Layout options for a windowed, grouped table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    /// Fixed pixel height shared by group-header and item rows.
    #[serde(default = "default_row_height")]
    pub row_height: f64,

    /// Extra rows pre-rendered above and below the viewport to reduce
    /// flicker on fast scroll.
    #[serde(default = "default_overscan")]
    pub overscan: usize,

    /// Visible container height in pixels.
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,

    /// Record field used as the group key.
    #[serde(default)]
    pub group_field: GroupField,
}

fn default_row_height() -> f64 {
    DEFAULT_ROW_HEIGHT
}

fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

fn default_viewport_height() -> f64 {
    DEFAULT_VIEWPORT_HEIGHT
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            group_field: GroupField::Region,
        }
    }
}

impl WindowConfig {
    /// Parses a (possibly partial) JSON configuration and validates it.
    pub fn from_json(json: &str) -> Result<Self, WindowError> {
        let config: WindowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_group_field(mut self, group_field: GroupField) -> Self {
        self.group_field = group_field;
        self
    }

    /// Rejects values the windowing math is not defined for.
    pub fn validate(&self) -> Result<(), WindowError> {
        check_row_height(self.row_height)?;
        check_viewport_height(self.viewport_height)?;
        Ok(())
    }
}

pub(crate) fn check_row_height(row_height: f64) -> Result<(), WindowError> {
    if row_height.is_finite() && row_height > 0.0 {
        Ok(())
    } else {
        Err(WindowError::InvalidRowHeight(row_height))
    }
}

pub(crate) fn check_viewport_height(viewport_height: f64) -> Result<(), WindowError> {
    if viewport_height.is_finite() && viewport_height >= 0.0 {
        Ok(())
    } else {
        Err(WindowError::InvalidViewportHeight(viewport_height))
    }
}

pub(crate) fn check_scroll_offset(scroll_offset: f64) -> Result<(), WindowError> {
    if scroll_offset.is_finite() && scroll_offset >= 0.0 {
        Ok(())
    } else {
        Err(WindowError::InvalidScrollOffset(scroll_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.row_height, 50.0);
        assert_eq!(config.overscan, 5);
        assert_eq!(config.viewport_height, 500.0);
        assert_eq!(config.group_field, GroupField::Region);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WindowConfig::from_json(r#"{"rowHeight": 32}"#).unwrap();
        assert_eq!(config.row_height, 32.0);
        assert_eq!(config.overscan, DEFAULT_OVERSCAN);
        assert_eq!(config.viewport_height, DEFAULT_VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{"rowHeight": 24, "overscan": 2, "viewportHeight": 300, "groupField": "channel"}"#;
        let config = WindowConfig::from_json(json).unwrap();
        assert_eq!(config.overscan, 2);
        assert_eq!(config.viewport_height, 300.0);
        assert_eq!(config.group_field, GroupField::Channel);
    }

    #[test]
    fn test_rejects_zero_row_height() {
        let err = WindowConfig::from_json(r#"{"rowHeight": 0}"#).unwrap_err();
        assert!(matches!(err, WindowError::InvalidRowHeight(h) if h == 0.0));
    }

    #[test]
    fn test_rejects_negative_viewport() {
        let config = WindowConfig::default().with_viewport_height(-1.0);
        assert!(matches!(config.validate(), Err(WindowError::InvalidViewportHeight(_))));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(check_row_height(f64::NAN).is_err());
        assert!(check_row_height(f64::INFINITY).is_err());
        assert!(check_viewport_height(f64::NAN).is_err());
        assert!(check_scroll_offset(f64::NAN).is_err());
        assert!(check_scroll_offset(-0.5).is_err());
        assert!(check_scroll_offset(0.0).is_ok());
        assert!(check_viewport_height(0.0).is_ok());
    }

    #[test]
    fn test_rejects_negative_overscan_json() {
        let err = WindowConfig::from_json(r#"{"overscan": -1}"#).unwrap_err();
        assert!(matches!(err, WindowError::Config(_)));
    }
}
