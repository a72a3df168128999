//! Filesystem-backed scene and asset stores.
//!
//! Layout under the store root:
//!
//! ```text
//! <root>/<workspace>/scenes/<scene>.json
//! <root>/<workspace>/assets/<asset file>
//! ```
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crashed run never leaves a truncated scene or asset behind.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use skyline_domain::{SceneDocument, SceneId, WorkspaceId};
use tokio::fs;

use crate::infrastructure::ports::{
    AssetStorePort, ClockPort, PersistenceError, ScenePersistencePort, UploadError, UploadOutcome,
};

const SCENES_DIR: &str = "scenes";
const ASSETS_DIR: &str = "assets";

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

// =============================================================================
// Scene store
// =============================================================================

/// Stores each scene as one pretty-printed JSON document.
pub struct FsSceneStore {
    root: PathBuf,
    clock: Arc<dyn ClockPort>,
}

impl FsSceneStore {
    pub fn new(root: impl Into<PathBuf>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            root: root.into(),
            clock,
        }
    }

    pub fn scene_path(&self, workspace_id: &WorkspaceId, scene_id: &SceneId) -> PathBuf {
        self.root
            .join(workspace_id.as_str())
            .join(SCENES_DIR)
            .join(format!("{}.json", scene_id.as_str()))
    }
}

#[async_trait]
impl ScenePersistencePort for FsSceneStore {
    async fn load_or_create_scene(
        &self,
        workspace_id: &WorkspaceId,
        scene_id: &SceneId,
    ) -> Result<SceneDocument, PersistenceError> {
        let path = self.scene_path(workspace_id, scene_id);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    workspace_id = %workspace_id,
                    scene_id = %scene_id,
                    "Scene does not exist yet, creating it"
                );
                return Ok(SceneDocument::new(workspace_id.clone(), scene_id.clone()));
            }
            Err(e) => return Err(PersistenceError::storage("load_scene", e)),
        };

        let document: SceneDocument =
            serde_json::from_str(&content).map_err(PersistenceError::serialization)?;
        if document.workspace_id() != workspace_id || document.scene_id() != scene_id {
            return Err(PersistenceError::storage(
                "load_scene",
                format!(
                    "{} holds scene {}/{}",
                    path.display(),
                    document.workspace_id(),
                    document.scene_id()
                ),
            ));
        }

        tracing::info!(
            workspace_id = %workspace_id,
            scene_id = %scene_id,
            root_nodes = document.root_nodes().len(),
            "Loaded existing scene"
        );
        Ok(document)
    }

    async fn save(&self, document: &SceneDocument) -> Result<(), PersistenceError> {
        let path = self.scene_path(document.workspace_id(), document.scene_id());

        let mut stamped = document.clone();
        stamped.mark_updated(self.clock.now());
        let json =
            serde_json::to_string_pretty(&stamped).map_err(PersistenceError::serialization)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::storage("save_scene", e))?;
        }
        let partial = temp_sibling(&path);
        fs::write(&partial, json)
            .await
            .map_err(|e| PersistenceError::storage("save_scene", e))?;
        fs::rename(&partial, &path)
            .await
            .map_err(|e| PersistenceError::storage("save_scene", e))?;

        tracing::info!(path = %path.display(), "Saved scene");
        Ok(())
    }
}

// =============================================================================
// Asset store
// =============================================================================

/// Copies model files into a workspace's asset folder, keyed by filename.
pub struct FsAssetStore {
    assets_dir: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>, workspace_id: &WorkspaceId) -> Self {
        Self {
            assets_dir: root.into().join(workspace_id.as_str()).join(ASSETS_DIR),
        }
    }

    pub fn stored_path(&self, asset_file: &str) -> PathBuf {
        self.assets_dir.join(asset_file)
    }
}

#[async_trait]
impl AssetStorePort for FsAssetStore {
    async fn upload_if_absent(
        &self,
        local_path: &Path,
        asset_file: &str,
    ) -> Result<UploadOutcome, UploadError> {
        // Keys are plain filenames; anything path-like would escape the store.
        if asset_file.is_empty() || asset_file.contains(['/', '\\']) || asset_file == ".." {
            return Err(UploadError::rejected(asset_file, "invalid asset key"));
        }

        let target = self.stored_path(asset_file);
        let present = fs::try_exists(&target)
            .await
            .map_err(|e| UploadError::rejected(asset_file, e))?;
        if present {
            tracing::debug!(asset_file, "Asset already present in store");
            return Ok(UploadOutcome::AlreadyPresent);
        }

        let source_meta = fs::metadata(local_path)
            .await
            .map_err(|e| UploadError::SourceUnreadable {
                path: local_path.to_path_buf(),
                message: e.to_string(),
            })?;
        if !source_meta.is_file() {
            return Err(UploadError::SourceUnreadable {
                path: local_path.to_path_buf(),
                message: "not a regular file".to_string(),
            });
        }

        fs::create_dir_all(&self.assets_dir)
            .await
            .map_err(|e| UploadError::rejected(asset_file, e))?;
        let partial = temp_sibling(&target);
        fs::copy(local_path, &partial)
            .await
            .map_err(|e| UploadError::rejected(asset_file, e))?;
        fs::rename(&partial, &target)
            .await
            .map_err(|e| UploadError::rejected(asset_file, e))?;

        tracing::info!(asset_file, bytes = source_meta.len(), "Uploaded asset");
        Ok(UploadOutcome::Uploaded)
    }
}
