use crate::model::{Leaf, Node};

/// Pre-order iterator over every node of a tree, root first
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped next
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Walk all nodes reachable from `root` in document order
pub fn walk(root: &Node) -> Walk<'_> {
    Walk { stack: vec![root] }
}

/// Full dotted path of `node`; `""` for the root
///
/// Paths are computed once at construction, so this is O(1).
pub fn full_path(node: &Node) -> &str {
    node.path()
}

/// All leaves reachable from `root`, in document order
pub fn leaves(root: &Node) -> Vec<&Node> {
    walk(root).filter(|node| node.is_leaf()).collect()
}

/// The leaf set the resolution engine consumes
pub fn leaf_set(root: &Node) -> Vec<Leaf> {
    walk(root)
        .filter(|node| node.is_leaf())
        .map(Leaf::from)
        .collect()
}
