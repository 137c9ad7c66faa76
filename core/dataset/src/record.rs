//! FILENAME: core/dataset/src/record.rs
//! PURPOSE: The immutable record type and the grouping key it is bucketed by.

use serde::{Deserialize, Serialize};

/// Position of a record in the loaded sequence. Records have no explicit id.
pub type RecordIndex = usize;

/// Value of the grouping field (e.g. "North").
pub type GroupKey = String;

/// One row of campaign data as supplied by the data source.
/// Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub region: String,
    pub channel: String,
    pub spend: f64,
    pub impressions: u64,
    pub conversions: u64,
    pub clicks: u64,
}

impl Record {
    pub fn new(region: impl Into<String>, channel: impl Into<String>) -> Self {
        Record {
            region: region.into(),
            channel: channel.into(),
            spend: 0.0,
            impressions: 0,
            conversions: 0,
            clicks: 0,
        }
    }

    pub fn with_metrics(mut self, spend: f64, impressions: u64, conversions: u64, clicks: u64) -> Self {
        self.spend = spend;
        self.impressions = impressions;
        self.conversions = conversions;
        self.clicks = clicks;
        self
    }

    /// Returns the value this record is grouped under for the given field.
    pub fn group_key(&self, field: GroupField) -> &str {
        match field {
            GroupField::Region => &self.region,
            GroupField::Channel => &self.channel,
        }
    }
}

/// Which string field records are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum GroupField {
    #[default]
    Region,
    Channel,
}
