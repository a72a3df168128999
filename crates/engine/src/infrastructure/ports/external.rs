//! External service port traits (scene persistence, asset upload).

use std::path::Path;

use async_trait::async_trait;
use skyline_domain::{SceneDocument, SceneId, WorkspaceId};

use super::error::{PersistenceError, UploadError};

// =============================================================================
// Scene Persistence Port
// =============================================================================

/// Loads and stores scene documents.
///
/// The import use case calls these in a fixed order: load-or-create, then
/// (on the document) clear, set preset, add root node, then save.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScenePersistencePort: Send + Sync {
    /// Load the scene, or return a new empty document if it does not exist yet.
    async fn load_or_create_scene(
        &self,
        workspace_id: &WorkspaceId,
        scene_id: &SceneId,
    ) -> Result<SceneDocument, PersistenceError>;

    async fn save(&self, document: &SceneDocument) -> Result<(), PersistenceError>;
}

// =============================================================================
// Asset Store Port
// =============================================================================

/// Result of an idempotent upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded,
    AlreadyPresent,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStorePort: Send + Sync {
    /// Upload the file at `local_path` under `asset_file` unless the store
    /// already holds it. Calling this twice for the same asset must not
    /// produce a second copy.
    async fn upload_if_absent(
        &self,
        local_path: &Path,
        asset_file: &str,
    ) -> Result<UploadOutcome, UploadError>;
}
