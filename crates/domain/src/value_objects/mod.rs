//! Value objects - immutable types compared by value.

mod asset_type;
mod names;
mod vector3;

pub use asset_type::AssetType;
pub use names::NodeName;
pub use vector3::Vector3;
