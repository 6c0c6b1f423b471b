use serde::{Deserialize, Serialize};

use super::node::Node;

/// A leaf as the resolution engine sees it: its full path and type tag
///
/// Callers that already know their leaf set can build these directly;
/// otherwise `traversal::leaf_set` derives them from a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leaf {
    pub path: String,
    pub type_tag: String,
}

impl Leaf {
    pub fn new(path: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            type_tag: type_tag.into(),
        }
    }
}

impl From<&Node> for Leaf {
    fn from(node: &Node) -> Self {
        Self::new(node.path(), node.type_tag())
    }
}
