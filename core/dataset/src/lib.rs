//! FILENAME: core/dataset/src/lib.rs
//! PURPOSE: Record model and ingestion for the grouped table.
//! CONTEXT: The window engine treats everything in this crate as a read-only,
//! already-validated data source. Validation happens here, at load time.

mod error;
mod loader;
pub mod record;

pub use error::DataError;
pub use loader::{load_records_file, load_records_json, load_records_value};
pub use record::{GroupField, GroupKey, Record, RecordIndex};
