//! Building placement metadata importer.
//!
//! Both formats are normalised into the same record shape, in file order. The
//! canonical `sequence_index` is always the zero-based record position.

use std::fmt;
use std::path::{Path, PathBuf};

use skyline_domain::{BuildingPlacement, DomainError, Vector3};
use thiserror::Error;
use tokio::fs;

use super::metadata_types::{BuildingRecord, CSV_COLUMNS, CSV_MESH_COLUMN};

/// Format of a metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// Seven comma-separated positional columns, see [`CSV_COLUMNS`].
    Csv,
    /// A JSON array of building objects.
    Json,
}

impl MetadataFormat {
    /// Whether the record at `sequence_index == 0` is treated as a header
    /// and dropped before node building.
    ///
    /// The first row of a tabular export is reserved and never describes a
    /// building. JSON exports have no such row.
    pub fn skips_header_row(self) -> bool {
        matches!(self, Self::Csv)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read metadata file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: field {field} is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] DomainError),
}

/// Importer for one building metadata file.
pub struct MetadataImporter {
    path: PathBuf,
    format: MetadataFormat,
}

impl MetadataImporter {
    pub fn new(path: impl Into<PathBuf>, format: MetadataFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> MetadataFormat {
        self.format
    }

    /// Read and parse the whole file.
    pub async fn import(&self) -> Result<Vec<BuildingPlacement>, ParseError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| ParseError::Io {
                path: self.path.clone(),
                source,
            })?;

        let placements = match self.format {
            MetadataFormat::Csv => parse_csv(&content)?,
            MetadataFormat::Json => parse_json(&content)?,
        };

        tracing::debug!(
            path = %self.path.display(),
            format = %self.format,
            records = placements.len(),
            "Parsed building metadata"
        );
        Ok(placements)
    }
}

/// Parse tabular metadata: no header semantics, seven positional fields.
///
/// Numbers use `str::parse::<f64>`, which is locale-independent; anything
/// that does not parse is an error rather than a silent zero.
pub fn parse_csv(content: &str) -> Result<Vec<BuildingPlacement>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut placements = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Lines holding only whitespace trim down to a single empty field.
        if record.iter().all(str::is_empty) {
            continue;
        }

        let sequence_index = placements.len();
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(sequence_index as u64 + 1);

        if record.len() != CSV_COLUMNS.len() {
            return Err(ParseError::FieldCount {
                line,
                expected: CSV_COLUMNS.len(),
                found: record.len(),
            });
        }

        let number = |column: usize| -> Result<f64, ParseError> {
            let value = &record[column];
            value.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                line,
                field: CSV_COLUMNS[column],
                value: value.to_string(),
            })
        };

        // Index columns must be numeric even though only the row position is kept.
        number(0)?;
        number(1)?;
        let position = Vector3::new(number(3)?, number(4)?, number(5)?);
        let rotation_angle = number(6)?;

        placements.push(BuildingPlacement::new(
            sequence_index,
            &record[CSV_MESH_COLUMN],
            position,
            rotation_angle,
        )?);
    }
    Ok(placements)
}

/// Parse JSON metadata: an array of building objects.
pub fn parse_json(content: &str) -> Result<Vec<BuildingPlacement>, ParseError> {
    let records: Vec<BuildingRecord> = serde_json::from_str(content)?;
    records
        .into_iter()
        .enumerate()
        .map(|(sequence_index, record)| {
            BuildingPlacement::new(
                sequence_index,
                record.mesh_filename,
                Vector3::new(record.position_x, record.position_y, record.position_z),
                record.angle,
            )
            .map_err(ParseError::from)
        })
        .collect()
}
