//! Use cases - User story orchestration.
//!
//! Use cases orchestrate the metadata importers, the asset catalog and the
//! ports to turn placement files into stored scenes.

pub mod scene;

// Re-export main types
pub use scene::SceneUseCases;
