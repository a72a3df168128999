//! Scene use cases.

mod assemble;
mod build_nodes;
mod import;

pub use assemble::assemble_root;
pub use build_nodes::{node_for_placement, BuildOutcome, BuildSceneNodes, NodeBuild, RowFailure};
pub use import::{
    ImportError, ImportReport, ImportRequest, ImportScene, DEFAULT_ENVIRONMENT_PRESET,
};

use std::sync::Arc;

/// Container for scene use cases.
pub struct SceneUseCases {
    pub import: Arc<ImportScene>,
}

impl SceneUseCases {
    pub fn new(import: Arc<ImportScene>) -> Self {
        Self { import }
    }
}
