//! Scene import use case.
//!
//! Runs the whole pipeline for one scene: parse metadata and scan the asset
//! directory, build nodes, assemble the root node, then replace the scene's
//! content through the persistence port.
//!
//! Everything that can fail fatally happens before the scene is loaded, so a
//! broken metadata file or asset directory never touches stored scenes.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use skyline_domain::{SceneId, WorkspaceId};
use thiserror::Error;
use tracing::Instrument;

use super::assemble::assemble_root;
use super::build_nodes::{BuildSceneNodes, RowFailure};
use crate::infrastructure::catalog::{AssetCatalog, CatalogError};
use crate::infrastructure::correlation::RunId;
use crate::infrastructure::importers::{MetadataFormat, MetadataImporter, ParseError};
use crate::infrastructure::ports::{PersistenceError, ScenePersistencePort};

/// Environment preset applied when none is configured.
pub const DEFAULT_ENVIRONMENT_PRESET: &str = "neutral";

/// Everything an import run needs to know.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub workspace_id: WorkspaceId,
    pub scene_id: SceneId,
    pub asset_dir: PathBuf,
    pub metadata_path: PathBuf,
    pub metadata_format: MetadataFormat,
    pub environment_preset: String,
}

/// Fatal import errors. Any of these means the scene was not saved.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Metadata error: {0}")]
    Parse(#[from] ParseError),
    #[error("Asset catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Scene persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Summary of a completed import.
#[derive(Debug)]
pub struct ImportReport {
    pub run_id: RunId,
    pub records_parsed: usize,
    pub nodes_built: usize,
    pub skipped_header_rows: usize,
    pub failures: Vec<RowFailure>,
}

impl ImportReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Import {}: {} records parsed, {} nodes built, {} failed",
            self.run_id.short(),
            self.records_parsed,
            self.nodes_built,
            self.failures.len()
        )?;
        for failure in &self.failures {
            writeln!(f, "  {failure}")?;
        }
        Ok(())
    }
}

/// Import scene use case.
pub struct ImportScene {
    persistence: Arc<dyn ScenePersistencePort>,
    build_nodes: Arc<BuildSceneNodes>,
}

impl ImportScene {
    pub fn new(
        persistence: Arc<dyn ScenePersistencePort>,
        build_nodes: Arc<BuildSceneNodes>,
    ) -> Self {
        Self {
            persistence,
            build_nodes,
        }
    }

    pub async fn execute(&self, request: &ImportRequest) -> Result<ImportReport, ImportError> {
        let run_id = RunId::new();
        let span = tracing::info_span!(
            "import_scene",
            run_id = %run_id.short(),
            workspace_id = %request.workspace_id,
            scene_id = %request.scene_id,
        );
        self.run(run_id, request).instrument(span).await
    }

    async fn run(&self, run_id: RunId, request: &ImportRequest) -> Result<ImportReport, ImportError> {
        tracing::info!(
            metadata = %request.metadata_path.display(),
            format = %request.metadata_format,
            asset_dir = %request.asset_dir.display(),
            "Building city skyline scene"
        );

        let importer = MetadataImporter::new(&request.metadata_path, request.metadata_format);
        let (placements, catalog) = tokio::try_join!(
            async { importer.import().await.map_err(ImportError::from) },
            async {
                AssetCatalog::scan(&request.asset_dir)
                    .await
                    .map_err(ImportError::from)
            },
        )?;

        let outcome = self
            .build_nodes
            .execute(&placements, &catalog, request.metadata_format)
            .await?;
        let nodes_built = outcome.nodes.len();
        let root = assemble_root(outcome.nodes);

        let mut document = self
            .persistence
            .load_or_create_scene(&request.workspace_id, &request.scene_id)
            .await?;
        // Every run fully replaces the scene's content.
        document.clear();
        document.set_environment_preset(request.environment_preset.clone());
        // The document was just cleared, so the root name is always free.
        document.add_root_node_if_name_not_exists(root);
        self.persistence.save(&document).await?;

        let report = ImportReport {
            run_id,
            records_parsed: placements.len(),
            nodes_built,
            skipped_header_rows: outcome.skipped_header_rows,
            failures: outcome.failures,
        };
        tracing::info!(
            records = report.records_parsed,
            nodes = report.nodes_built,
            failures = report.failures.len(),
            "Scene import finished"
        );
        Ok(report)
    }
}
