//! Raw record shapes of the supported metadata files.

use serde::Deserialize;

/// Positional column layout of the tabular format. The file carries no header
/// row with these names; they exist for error messages only.
pub const CSV_COLUMNS: [&str; 7] = [
    "sequenceIndex",
    "buildIndex",
    "meshName",
    "x",
    "y",
    "z",
    "rotationAngle",
];

/// Column holding the mesh filename; every other column is numeric.
pub(super) const CSV_MESH_COLUMN: usize = 2;

/// One building object of the JSON format.
///
/// Exports also carry `BuildIndex`, `BufferIndex`, `Problems` and
/// `CitizenUnits`; those are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildingRecord {
    pub mesh_filename: String,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub angle: f64,
}
