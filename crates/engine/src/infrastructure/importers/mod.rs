//! Metadata importers.
//!
//! This module reads building placement files (tabular or JSON) and converts
//! them to canonical [`skyline_domain::BuildingPlacement`] records.

mod metadata;
mod metadata_types;

pub use metadata::{parse_csv, parse_json, MetadataFormat, MetadataImporter, ParseError};
pub use metadata_types::{BuildingRecord, CSV_COLUMNS};
