//! ModelReferenceNode entity - a scene-graph leaf pointing at one model file

use serde::{Deserialize, Serialize};

use crate::common::{file_base, file_extension, file_stem};
use crate::error::DomainError;
use crate::value_objects::{AssetType, NodeName, Vector3};

/// A rendered building: a model file reference plus transform and shadow flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReferenceNode {
    name: NodeName,
    /// Filename relative to the asset directory (e.g. `silo.gltf`)
    asset_file: String,
    asset_type: AssetType,
    position: Vector3,
    rotation: Vector3,
    scale: Vector3,
    cast_shadow: bool,
    receive_shadow: bool,
}

impl ModelReferenceNode {
    /// Create a node with an identity transform and shadows disabled.
    pub fn new(name: NodeName, asset_file: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            name,
            asset_file: asset_file.into(),
            asset_type,
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// Create a node for a model file, deriving name and type from the path.
    ///
    /// The node name is the file's basename without extension unless `name`
    /// is given. The asset type is the uppercased extension, and unsupported
    /// extensions are an error.
    pub fn from_asset_file(asset_path: &str, name: Option<NodeName>) -> Result<Self, DomainError> {
        let extension = file_extension(asset_path).unwrap_or_default();
        let asset_type = AssetType::from_extension(extension)?;
        let name = match name {
            Some(name) => name,
            None => NodeName::new(file_stem(asset_path))?,
        };
        Ok(Self::new(name, file_base(asset_path), asset_type))
    }

    // --- Builders ---

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_cast_shadow(mut self, cast_shadow: bool) -> Self {
        self.cast_shadow = cast_shadow;
        self
    }

    pub fn with_receive_shadow(mut self, receive_shadow: bool) -> Self {
        self.receive_shadow = receive_shadow;
        self
    }

    // --- Accessors ---

    pub fn name(&self) -> &NodeName {
        &self.name
    }

    pub fn asset_file(&self) -> &str {
        &self.asset_file
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn rotation(&self) -> Vector3 {
        self.rotation
    }

    pub fn scale(&self) -> Vector3 {
        self.scale
    }

    pub fn cast_shadow(&self) -> bool {
        self.cast_shadow
    }

    pub fn receive_shadow(&self) -> bool {
        self.receive_shadow
    }
}
