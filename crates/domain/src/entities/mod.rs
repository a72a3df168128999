//! Domain entities
//!
//! Placement records flow in from metadata files; model reference nodes and
//! root nodes flow out into a scene document.

mod model_ref;
mod placement;
mod root_node;
mod scene_document;

pub use model_ref::ModelReferenceNode;
pub use placement::BuildingPlacement;
pub use root_node::{RootNode, ROOT_NODE_NAME};
pub use scene_document::SceneDocument;
