//! BuildingPlacement entity - one building row from a metadata file

use serde::{Deserialize, Serialize};

use crate::common::file_stem;
use crate::error::DomainError;
use crate::value_objects::Vector3;

/// One building's mesh reference and spatial transform, in canonical form.
///
/// Both metadata formats (tabular and JSON) are normalised into this shape.
/// Construction enforces a non-empty mesh name and finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPlacement {
    /// Zero-based position of the row in its source file
    sequence_index: usize,
    /// Logical mesh filename as written in the metadata (e.g. `silo.obj`)
    mesh_name: String,
    position: Vector3,
    /// Rotation in degrees; its axis depends on the exporting tool
    rotation_angle: f64,
}

impl BuildingPlacement {
    pub fn new(
        sequence_index: usize,
        mesh_name: impl Into<String>,
        position: Vector3,
        rotation_angle: f64,
    ) -> Result<Self, DomainError> {
        let mesh_name = mesh_name.into().trim().to_string();
        if mesh_name.is_empty() {
            return Err(DomainError::validation(format!(
                "Row {sequence_index}: mesh name cannot be empty"
            )));
        }
        if !position.is_finite() {
            return Err(DomainError::validation(format!(
                "Row {sequence_index}: position must be finite, got {position:?}"
            )));
        }
        if !rotation_angle.is_finite() {
            return Err(DomainError::validation(format!(
                "Row {sequence_index}: rotation angle must be finite, got {rotation_angle}"
            )));
        }
        Ok(Self {
            sequence_index,
            mesh_name,
            position,
            rotation_angle,
        })
    }

    // --- Accessors ---

    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    pub fn mesh_name(&self) -> &str {
        &self.mesh_name
    }

    /// Mesh name stripped of directories and extension; the catalog lookup key.
    pub fn mesh_stem(&self) -> &str {
        file_stem(&self.mesh_name)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_placement() {
        let p = BuildingPlacement::new(1, "silo.obj", Vector3::new(4.0, 5.0, 6.0), 45.0).unwrap();
        assert_eq!(p.sequence_index(), 1);
        assert_eq!(p.mesh_name(), "silo.obj");
        assert_eq!(p.mesh_stem(), "silo");
        assert_eq!(p.position(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(p.rotation_angle(), 45.0);
    }

    #[test]
    fn empty_mesh_name_rejected() {
        let err = BuildingPlacement::new(3, "  ", Vector3::ZERO, 0.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("Row 3"));
    }

    #[test]
    fn non_finite_numbers_rejected() {
        assert!(BuildingPlacement::new(0, "a.obj", Vector3::new(f64::NAN, 0.0, 0.0), 0.0).is_err());
        assert!(BuildingPlacement::new(0, "a.obj", Vector3::ZERO, f64::INFINITY).is_err());
    }
}
