use crate::errors::{Result, SteerError};
use crate::model::Node;

/// Find the node at `path`, descending one path segment at a time
///
/// `""` addresses the root.
pub fn find<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    if path.is_empty() {
        return Some(root);
    }

    let mut current = root;
    for segment in path.split('.') {
        current = current
            .children()
            .iter()
            .find(|child| child.name() == segment)?;
    }
    Some(current)
}

/// Like [`find`], but a missing node is an error
///
/// # Errors
///
/// Returns `NodeNotFound` if no node has the given path.
pub fn require<'a>(root: &'a Node, path: &str) -> Result<&'a Node> {
    find(root, path).ok_or_else(|| SteerError::NodeNotFound {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleSpec;

    fn tree() -> Node {
        ModuleSpec::new("M", "M")
            .child(ModuleSpec::new("h", "ModuleList").child(ModuleSpec::new("0", "Block")))
            .build()
            .unwrap()
    }

    #[test]
    fn test_find_nested() {
        let root = tree();
        let node = find(&root, "h.0").unwrap();
        assert_eq!(node.type_tag(), "Block");
        assert_eq!(node.path(), "h.0");
    }

    #[test]
    fn test_find_root() {
        let root = tree();
        assert!(find(&root, "").unwrap().is_root());
    }

    #[test]
    fn test_require_missing() {
        let root = tree();
        assert_eq!(
            require(&root, "h.1").unwrap_err(),
            SteerError::NodeNotFound {
                path: "h.1".to_string()
            }
        );
        assert!(find(&root, "h..0").is_none());
    }
}
