//! Scene assembly: groups built nodes under the import's root node.

use skyline_domain::{ModelReferenceNode, RootNode};

/// Collect `nodes` under a node named "Root", keeping their order.
pub fn assemble_root(nodes: impl IntoIterator<Item = ModelReferenceNode>) -> RootNode {
    nodes.into_iter().collect()
}
