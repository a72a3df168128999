extern crate self as skyline_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    BuildingPlacement, ModelReferenceNode, RootNode, SceneDocument, ROOT_NODE_NAME,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{SceneId, WorkspaceId};

// Re-export value objects
pub use value_objects::{AssetType, NodeName, Vector3};
