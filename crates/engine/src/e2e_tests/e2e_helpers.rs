//! Helpers for wiring the App to filesystem stores in a temp directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use skyline_domain::{SceneDocument, SceneId, WorkspaceId};
use tempfile::TempDir;

use crate::app::App;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::filesystem::{FsAssetStore, FsSceneStore};
use crate::infrastructure::importers::MetadataFormat;
use crate::infrastructure::ports::ScenePersistencePort;
use crate::use_cases::scene::{ImportRequest, DEFAULT_ENVIRONMENT_PRESET};

pub const WORKSPACE: &str = "CookieFactory";
pub const SCENE: &str = "Skyline";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// A temp directory holding converted models, a metadata file and a store.
pub struct ImportFixture {
    pub dir: TempDir,
    pub app: App,
    pub scene_store: Arc<FsSceneStore>,
    pub asset_store: Arc<FsAssetStore>,
}

impl ImportFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("converted")).unwrap();

        let store_dir = dir.path().join("store");
        let workspace_id = workspace_id();
        let scene_store = Arc::new(FsSceneStore::new(
            &store_dir,
            Arc::new(FixedClock(fixed_now())),
        ));
        let asset_store = Arc::new(FsAssetStore::new(&store_dir, &workspace_id));
        let app = App::new(scene_store.clone(), asset_store.clone());

        Self {
            dir,
            app,
            scene_store,
            asset_store,
        }
    }

    pub fn asset_dir(&self) -> PathBuf {
        self.dir.path().join("converted")
    }

    pub fn write_asset(&self, file: &str, content: &str) {
        std::fs::write(self.asset_dir().join(file), content).unwrap();
    }

    pub fn write_metadata(&self, file: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(file);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn request(&self, metadata_path: &Path, format: MetadataFormat) -> ImportRequest {
        ImportRequest {
            workspace_id: workspace_id(),
            scene_id: scene_id(),
            asset_dir: self.asset_dir(),
            metadata_path: metadata_path.to_path_buf(),
            metadata_format: format,
            environment_preset: DEFAULT_ENVIRONMENT_PRESET.to_string(),
        }
    }

    pub async fn stored_scene(&self) -> SceneDocument {
        self.scene_store
            .load_or_create_scene(&workspace_id(), &scene_id())
            .await
            .unwrap()
    }

    pub fn scene_file_exists(&self) -> bool {
        self.scene_store
            .scene_path(&workspace_id(), &scene_id())
            .exists()
    }
}

pub fn workspace_id() -> WorkspaceId {
    WorkspaceId::new(WORKSPACE).unwrap()
}

pub fn scene_id() -> SceneId {
    SceneId::new(SCENE).unwrap()
}
