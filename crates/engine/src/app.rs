//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{AssetStorePort, ScenePersistencePort};
use crate::use_cases;
use crate::use_cases::scene::{BuildSceneNodes, ImportScene};

/// Main application state: the use cases wired on top of the ports.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub scene: use_cases::SceneUseCases,
}

impl App {
    pub fn new(
        persistence: Arc<dyn ScenePersistencePort>,
        asset_store: Arc<dyn AssetStorePort>,
    ) -> Self {
        let build_nodes = Arc::new(BuildSceneNodes::new(asset_store));
        let import = Arc::new(ImportScene::new(persistence, build_nodes));

        Self {
            use_cases: UseCases {
                scene: use_cases::SceneUseCases::new(import),
            },
        }
    }
}
