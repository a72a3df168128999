//! Supported 3D asset formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Format of a model file, named by its uppercased extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "GLTF")]
    Gltf,
    #[serde(rename = "GLB")]
    Glb,
    #[serde(rename = "OBJ")]
    Obj,
    #[serde(rename = "FBX")]
    Fbx,
    #[serde(rename = "STL")]
    Stl,
}

impl AssetType {
    pub const ALL: [AssetType; 5] = [Self::Gltf, Self::Glb, Self::Obj, Self::Fbx, Self::Stl];

    /// Derive the asset type from a file extension (without the dot).
    ///
    /// Matching is done on the uppercased extension, so `gltf` and `GLTF`
    /// are equivalent. Anything else is rejected rather than passed through.
    pub fn from_extension(extension: &str) -> Result<Self, DomainError> {
        match extension.to_ascii_uppercase().as_str() {
            "GLTF" => Ok(Self::Gltf),
            "GLB" => Ok(Self::Glb),
            "OBJ" => Ok(Self::Obj),
            "FBX" => Ok(Self::Fbx),
            "STL" => Ok(Self::Stl),
            _ => Err(DomainError::unsupported_asset_type(extension)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gltf => "GLTF",
            Self::Glb => "GLB",
            Self::Obj => "OBJ",
            Self::Fbx => "FBX",
            Self::Stl => "STL",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}
