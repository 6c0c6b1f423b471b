use serde::Serialize;

/// A node of the module tree
///
/// Nodes are only produced by `build_tree`, which validates names and
/// computes every node's full path once. After construction the tree is
/// read-only: there are no mutating methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    name: String,
    type_tag: String,
    /// Dot-joined ancestor names, root excluded; `""` for the root
    path: String,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(
        name: String,
        type_tag: String,
        path: String,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name,
            type_tag,
            path,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Full dotted path of this node (`""` for the root)
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// A node is a leaf exactly when it has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Only the root has an empty path, since child names are non-empty
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Summary used by detail views
    pub fn details(&self) -> NodeDetails {
        NodeDetails {
            name: self.name.clone(),
            path: self.path.clone(),
            type_tag: self.type_tag.clone(),
            is_leaf: self.is_leaf(),
            child_count: self.children.len(),
        }
    }
}

/// Flat description of one node, detached from the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetails {
    pub name: String,
    pub path: String,
    pub type_tag: String,
    pub is_leaf: bool,
    pub child_count: usize,
}

impl NodeDetails {
    /// The path as shown to users; the root renders as `(root)`
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "(root)"
        } else {
            &self.path
        }
    }
}

impl std::fmt::Display for NodeDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Full Path: {}", self.display_path())?;
        writeln!(f, "Module Type: {}", self.type_tag)?;
        writeln!(f, "Is Leaf: {}", self.is_leaf)?;
        write!(f, "Children Count: {}", self.child_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, type_tag: &str, path: &str) -> Node {
        Node::new(name.into(), type_tag.into(), path.into(), Vec::new())
    }

    #[test]
    fn test_leaf_flag_follows_children() {
        let attn = leaf("attn", "Attention", "h.0.attn");
        assert!(attn.is_leaf());
        assert!(!attn.is_root());

        let root = Node::new("GPT2Model".into(), "GPT2Model".into(), String::new(), vec![attn]);
        assert!(!root.is_leaf());
        assert!(root.is_root());
    }

    #[test]
    fn test_details_render_root_path() {
        let root = Node::new(
            "GPT2Model".into(),
            "GPT2Model".into(),
            String::new(),
            vec![leaf("wte", "Embedding", "wte")],
        );
        let details = root.details();

        assert_eq!(details.display_path(), "(root)");
        assert_eq!(details.child_count, 1);
        let text = details.to_string();
        assert!(text.contains("Full Path: (root)"));
        assert!(text.contains("Module Type: GPT2Model"));
        assert!(text.contains("Is Leaf: false"));
    }
}
