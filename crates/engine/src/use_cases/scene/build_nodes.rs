//! Scene node building use case.
//!
//! Resolves each placement's mesh against the asset catalog, turns it into a
//! model reference node and makes sure the model file is in the asset store.

use std::fmt;
use std::sync::Arc;

use skyline_domain::{BuildingPlacement, ModelReferenceNode, NodeName, Vector3};

use crate::infrastructure::catalog::{AssetCatalog, CatalogError};
use crate::infrastructure::importers::MetadataFormat;
use crate::infrastructure::ports::{AssetStorePort, UploadError, UploadOutcome};

/// A placement row that produced no node. Never aborts the run.
#[derive(Debug, Clone, PartialEq)]
pub enum RowFailure {
    /// No catalog entry matches the mesh basename.
    AssetResolution {
        sequence_index: usize,
        mesh_name: String,
    },
    /// The asset store rejected the model file.
    Upload {
        sequence_index: usize,
        asset_file: String,
        error: UploadError,
    },
}

impl RowFailure {
    pub fn sequence_index(&self) -> usize {
        match self {
            Self::AssetResolution { sequence_index, .. } | Self::Upload { sequence_index, .. } => {
                *sequence_index
            }
        }
    }
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetResolution {
                sequence_index,
                mesh_name,
            } => write!(
                f,
                "row {sequence_index}: no asset found for mesh {mesh_name:?}"
            ),
            Self::Upload {
                sequence_index,
                asset_file,
                error,
            } => write!(f, "row {sequence_index}: upload of {asset_file} failed: {error}"),
        }
    }
}

/// Result of building one placement.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeBuild {
    Built(ModelReferenceNode),
    Failed(RowFailure),
}

/// Nodes in input order plus the rows that were dropped.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub nodes: Vec<ModelReferenceNode>,
    pub failures: Vec<RowFailure>,
    /// Rows dropped by the header policy (not failures)
    pub skipped_header_rows: usize,
}

/// Build the node for a placement whose mesh resolved to `asset_file`.
///
/// Shadows are always on. Scale is always one. The placement's rotation
/// angle is not applied: the exported angle has no agreed axis or unit, so
/// the node keeps a zero rotation until that is settled.
pub fn node_for_placement(
    placement: &BuildingPlacement,
    asset_file: &str,
    name: Option<NodeName>,
) -> Result<ModelReferenceNode, CatalogError> {
    let node = ModelReferenceNode::from_asset_file(asset_file, name)
        .map_err(|source| CatalogError::for_asset(asset_file, source))?;

    Ok(node
        .with_cast_shadow(true)
        .with_receive_shadow(true)
        .with_position(placement.position())
        .with_rotation(Vector3::ZERO)
        .with_scale(Vector3::ONE))
}

/// Build scene nodes use case.
pub struct BuildSceneNodes {
    asset_store: Arc<dyn AssetStorePort>,
}

impl BuildSceneNodes {
    pub fn new(asset_store: Arc<dyn AssetStorePort>) -> Self {
        Self { asset_store }
    }

    /// Build nodes for all placements, in order.
    ///
    /// For tabular input the record at `sequence_index == 0` is dropped as a
    /// header row. Unsupported asset extensions abort the whole build;
    /// resolution and upload failures only drop their row.
    pub async fn execute(
        &self,
        placements: &[BuildingPlacement],
        catalog: &AssetCatalog,
        format: MetadataFormat,
    ) -> Result<BuildOutcome, CatalogError> {
        let mut outcome = BuildOutcome::default();

        for placement in placements {
            if format.skips_header_row() && placement.sequence_index() == 0 {
                tracing::debug!(mesh_name = placement.mesh_name(), "Skipping header row");
                outcome.skipped_header_rows += 1;
                continue;
            }

            match self.build_node(placement, catalog).await? {
                NodeBuild::Built(node) => outcome.nodes.push(node),
                NodeBuild::Failed(failure) => {
                    tracing::warn!(failure = %failure, "Placement row skipped");
                    outcome.failures.push(failure);
                }
            }
        }

        tracing::info!(
            nodes = outcome.nodes.len(),
            failures = outcome.failures.len(),
            skipped_header_rows = outcome.skipped_header_rows,
            "Built scene nodes"
        );
        Ok(outcome)
    }

    /// Resolve, build and upload a single placement.
    pub async fn build_node(
        &self,
        placement: &BuildingPlacement,
        catalog: &AssetCatalog,
    ) -> Result<NodeBuild, CatalogError> {
        let Some(asset_file) = catalog.resolve(placement.mesh_name()) else {
            return Ok(NodeBuild::Failed(RowFailure::AssetResolution {
                sequence_index: placement.sequence_index(),
                mesh_name: placement.mesh_name().to_string(),
            }));
        };

        let node = node_for_placement(placement, asset_file, None)?;

        let local_path = catalog.asset_path(asset_file);
        match self
            .asset_store
            .upload_if_absent(&local_path, asset_file)
            .await
        {
            Ok(UploadOutcome::Uploaded) => {
                tracing::debug!(asset_file, "Uploaded model file");
            }
            Ok(UploadOutcome::AlreadyPresent) => {}
            Err(error) => {
                return Ok(NodeBuild::Failed(RowFailure::Upload {
                    sequence_index: placement.sequence_index(),
                    asset_file: asset_file.to_string(),
                    error,
                }));
            }
        }

        Ok(NodeBuild::Built(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_domain::AssetType;

    use crate::infrastructure::importers::parse_csv;
    use crate::infrastructure::ports::MockAssetStorePort;

    fn placement(index: usize, mesh: &str, position: [f64; 3]) -> BuildingPlacement {
        BuildingPlacement::new(index, mesh, Vector3::from(position), 45.0).unwrap()
    }

    fn accepting_store() -> MockAssetStorePort {
        let mut store = MockAssetStorePort::new();
        store
            .expect_upload_if_absent()
            .returning(|_, _| Ok(UploadOutcome::Uploaded));
        store
    }

    #[test]
    fn node_carries_position_shadows_and_identity_rotation() {
        let p = placement(1, "silo.obj", [4.0, 5.0, 6.0]);
        let node = node_for_placement(&p, "silo.gltf", None).unwrap();

        assert_eq!(node.name().as_str(), "silo");
        assert_eq!(node.asset_file(), "silo.gltf");
        assert_eq!(node.asset_type(), AssetType::Gltf);
        assert_eq!(node.position(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(node.rotation(), Vector3::ZERO);
        assert_eq!(node.scale(), Vector3::ONE);
        assert!(node.cast_shadow());
        assert!(node.receive_shadow());
    }

    #[test]
    fn node_name_override() {
        let p = placement(1, "silo.obj", [0.0, 0.0, 0.0]);
        let node =
            node_for_placement(&p, "silo.glb", Some(NodeName::new("Silo 1").unwrap())).unwrap();
        assert_eq!(node.name().as_str(), "Silo 1");
    }

    #[test]
    fn asset_type_is_uppercased_extension() {
        let p = placement(1, "m.obj", [0.0, 0.0, 0.0]);
        for ext in ["gltf", "glb", "obj", "fbx", "stl"] {
            let node = node_for_placement(&p, &format!("m.{ext}"), None).unwrap();
            assert_eq!(node.asset_type().as_str(), ext.to_uppercase());
        }
    }

    #[test]
    fn building_twice_yields_identical_nodes() {
        let p = placement(4, "tower.obj", [1.0, 2.0, 3.0]);
        let first = node_for_placement(&p, "tower.glb", None).unwrap();
        let second = node_for_placement(&p, "tower.glb", None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unsupported_extension_is_fatal() {
        let p = placement(1, "silo.obj", [0.0, 0.0, 0.0]);
        let err = node_for_placement(&p, "silo.png", None).unwrap_err();
        match err {
            CatalogError::UnsupportedAssetType { asset_file, .. } => {
                assert_eq!(asset_file, "silo.png")
            }
            other => panic!("Expected UnsupportedAssetType, got {other:?}"),
        }
    }

    #[test]
    fn blank_asset_basename_is_not_reported_as_unsupported() {
        let p = placement(1, "silo.obj", [0.0, 0.0, 0.0]);
        let err = node_for_placement(&p, " .glb", None).unwrap_err();
        match err {
            CatalogError::InvalidAssetName { asset_file, source } => {
                assert_eq!(asset_file, " .glb");
                assert!(matches!(source, skyline_domain::DomainError::Validation(_)));
            }
            other => panic!("Expected InvalidAssetName, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn csv_header_row_is_skipped() {
        let placements = parse_csv("0,1,barn.obj,1.0,2.0,3.0,90\n").unwrap();
        let catalog = AssetCatalog::from_filenames("/assets", ["barn.gltf"]);
        let mut store = MockAssetStorePort::new();
        store.expect_upload_if_absent().never();

        let outcome = BuildSceneNodes::new(Arc::new(store))
            .execute(&placements, &catalog, MetadataFormat::Csv)
            .await
            .unwrap();

        assert!(outcome.nodes.is_empty());
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.skipped_header_rows, 1);
    }

    #[tokio::test]
    async fn csv_second_row_becomes_node() {
        let placements =
            parse_csv("0,1,barn.obj,1.0,2.0,3.0,90\n1,2,silo.obj,4.0,5.0,6.0,45\n").unwrap();
        let catalog = AssetCatalog::from_filenames("/assets", ["barn.gltf", "silo.gltf"]);
        let mut store = MockAssetStorePort::new();
        store
            .expect_upload_if_absent()
            .withf(|path, file| {
                path == std::path::Path::new("/assets/silo.gltf") && file == "silo.gltf"
            })
            .times(1)
            .returning(|_, _| Ok(UploadOutcome::Uploaded));

        let outcome = BuildSceneNodes::new(Arc::new(store))
            .execute(&placements, &catalog, MetadataFormat::Csv)
            .await
            .unwrap();

        assert_eq!(outcome.nodes.len(), 1);
        let node = &outcome.nodes[0];
        assert_eq!(node.asset_file(), "silo.gltf");
        assert_eq!(node.asset_type(), AssetType::Gltf);
        assert_eq!(node.position(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(node.rotation(), Vector3::ZERO);
        assert_eq!(node.scale(), Vector3::ONE);
        assert!(node.cast_shadow());
    }

    #[tokio::test]
    async fn json_first_row_is_kept() {
        let placements = vec![placement(0, "tower.obj", [1.0, 0.0, 0.0])];
        let catalog = AssetCatalog::from_filenames("/assets", ["tower.glb"]);

        let outcome = BuildSceneNodes::new(Arc::new(accepting_store()))
            .execute(&placements, &catalog, MetadataFormat::Json)
            .await
            .unwrap();

        assert_eq!(outcome.nodes.len(), 1);
        assert_eq!(outcome.nodes[0].asset_type(), AssetType::Glb);
        assert_eq!(outcome.nodes[0].position(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(outcome.skipped_header_rows, 0);
    }

    #[tokio::test]
    async fn missing_asset_is_recorded_not_fatal() {
        let placements = vec![
            placement(0, "ghost.obj", [0.0, 0.0, 0.0]),
            placement(1, "tower.obj", [1.0, 0.0, 0.0]),
        ];
        let catalog = AssetCatalog::from_filenames("/assets", ["tower.glb"]);

        let outcome = BuildSceneNodes::new(Arc::new(accepting_store()))
            .execute(&placements, &catalog, MetadataFormat::Json)
            .await
            .unwrap();

        assert_eq!(outcome.nodes.len(), 1);
        assert_eq!(
            outcome.failures,
            vec![RowFailure::AssetResolution {
                sequence_index: 0,
                mesh_name: "ghost.obj".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn upload_failure_drops_row_and_continues() {
        let placements = vec![
            placement(0, "barn.obj", [0.0, 0.0, 0.0]),
            placement(1, "silo.obj", [1.0, 0.0, 0.0]),
            placement(2, "tower.obj", [2.0, 0.0, 0.0]),
        ];
        let catalog =
            AssetCatalog::from_filenames("/assets", ["barn.glb", "silo.glb", "tower.glb"]);
        let mut store = MockAssetStorePort::new();
        store
            .expect_upload_if_absent()
            .times(3)
            .returning(|_, file| {
                if file == "silo.glb" {
                    Err(UploadError::rejected(file, "quota exceeded"))
                } else {
                    Ok(UploadOutcome::AlreadyPresent)
                }
            });

        let outcome = BuildSceneNodes::new(Arc::new(store))
            .execute(&placements, &catalog, MetadataFormat::Json)
            .await
            .unwrap();

        let files: Vec<_> = outcome.nodes.iter().map(|n| n.asset_file()).collect();
        assert_eq!(files, ["barn.glb", "tower.glb"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].sequence_index(), 1);
        assert!(matches!(outcome.failures[0], RowFailure::Upload { .. }));
    }

    #[tokio::test]
    async fn unsupported_asset_aborts_build() {
        let placements = vec![
            placement(0, "tower.obj", [0.0, 0.0, 0.0]),
            placement(1, "barn.obj", [0.0, 0.0, 0.0]),
        ];
        let catalog = AssetCatalog::from_filenames("/assets", ["tower.glb", "barn.txt"]);

        let result = BuildSceneNodes::new(Arc::new(accepting_store()))
            .execute(&placements, &catalog, MetadataFormat::Json)
            .await;

        assert!(matches!(
            result,
            Err(CatalogError::UnsupportedAssetType { .. })
        ));
    }

    #[test]
    fn failure_display() {
        let failure = RowFailure::AssetResolution {
            sequence_index: 3,
            mesh_name: "ghost.obj".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "row 3: no asset found for mesh \"ghost.obj\""
        );
    }
}
