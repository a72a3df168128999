//! RootNode entity - the top-level container for one import

use serde::{Deserialize, Serialize};

use crate::entities::ModelReferenceNode;
use crate::value_objects::NodeName;

/// Name given to the root node of every imported scene.
pub const ROOT_NODE_NAME: &str = "Root";

/// Top-level node aggregating all model reference nodes, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootNode {
    name: NodeName,
    children: Vec<ModelReferenceNode>,
}

impl RootNode {
    /// Create an empty node named [`ROOT_NODE_NAME`].
    pub fn new() -> Self {
        Self {
            name: NodeName::from_static(ROOT_NODE_NAME),
            children: Vec::new(),
        }
    }

    /// Create an empty container with a custom name.
    pub fn named(name: NodeName) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, node: ModelReferenceNode) {
        self.children.push(node);
    }

    pub fn name(&self) -> &NodeName {
        &self.name
    }

    pub fn children(&self) -> &[ModelReferenceNode] {
        &self.children
    }
}

impl Default for RootNode {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ModelReferenceNode> for RootNode {
    fn from_iter<I: IntoIterator<Item = ModelReferenceNode>>(iter: I) -> Self {
        let mut root = Self::new();
        root.children.extend(iter);
        root
    }
}
