//! SceneDocument entity - the persisted scene an import writes into

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::RootNode;
use crate::ids::{SceneId, WorkspaceId};

/// A scene as held by the persistence layer.
///
/// Holds an environment preset and a set of root nodes with unique names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    workspace_id: WorkspaceId,
    scene_id: SceneId,
    environment_preset: Option<String>,
    root_nodes: Vec<RootNode>,
    /// Set by the store when the document is saved
    updated_at: Option<DateTime<Utc>>,
}

impl SceneDocument {
    /// Create an empty scene document
    pub fn new(workspace_id: WorkspaceId, scene_id: SceneId) -> Self {
        Self {
            workspace_id,
            scene_id,
            environment_preset: None,
            root_nodes: Vec::new(),
            updated_at: None,
        }
    }

    /// Remove all root nodes and the environment preset.
    pub fn clear(&mut self) {
        self.root_nodes.clear();
        self.environment_preset = None;
    }

    pub fn set_environment_preset(&mut self, preset: impl Into<String>) {
        self.environment_preset = Some(preset.into());
    }

    /// Add `node` unless a root node with the same name is already present.
    ///
    /// Returns `true` when the node was added.
    pub fn add_root_node_if_name_not_exists(&mut self, node: RootNode) -> bool {
        if self.root_node(node.name().as_str()).is_some() {
            return false;
        }
        self.root_nodes.push(node);
        true
    }

    pub fn mark_updated(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    // --- Accessors ---

    pub fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    pub fn scene_id(&self) -> &SceneId {
        &self.scene_id
    }

    pub fn environment_preset(&self) -> Option<&str> {
        self.environment_preset.as_deref()
    }

    pub fn root_nodes(&self) -> &[RootNode] {
        &self.root_nodes
    }

    pub fn root_node(&self, name: &str) -> Option<&RootNode> {
        self.root_nodes.iter().find(|n| n.name().as_str() == name)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
