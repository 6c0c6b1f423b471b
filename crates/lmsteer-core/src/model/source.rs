//! Tree construction from an external object graph
//!
//! The loader collaborator owns the real model objects. It exposes them
//! through `ModuleSource` and supplies `type_tag_of`, so this crate never
//! introspects source objects itself.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::node::Node;
use crate::errors::{Result, SteerError};

/// Read-only view of one module in the loader's object graph
pub trait ModuleSource {
    /// Attribute name under the parent; for the root, a display name
    fn name(&self) -> &str;

    /// Direct children in declaration order
    fn children(&self) -> Vec<&Self>;
}

/// Plain in-memory module description
///
/// This is what model tree files deserialize into, and a convenient way to
/// describe trees in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ModuleSpec>,
}

impl ModuleSpec {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, builder style
    pub fn child(mut self, child: ModuleSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Build the validated Node tree for this description
    ///
    /// # Errors
    ///
    /// Same as [`build_tree`].
    pub fn build(&self) -> Result<Node> {
        build_tree(self, |spec| spec.type_tag.clone())
    }
}

impl ModuleSource for ModuleSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }
}

/// Build a Node tree from `root`, computing every node's full path
///
/// The root keeps its name for display but its path is `""`; the root may
/// itself be a leaf when it has no children.
///
/// # Errors
///
/// - `EmptyNodeName` if a non-root node has an empty name
/// - `InvalidNodeName` if a non-root name contains `.`
/// - `DuplicateChildName` if two siblings share a name
/// - `MissingTypeTag` if `type_tag_of` returns an empty string for any node
pub fn build_tree<S, F>(root: &S, type_tag_of: F) -> Result<Node>
where
    S: ModuleSource,
    F: Fn(&S) -> String,
{
    build_node(root, String::new(), &type_tag_of)
}

fn build_node<S, F>(source: &S, path: String, type_tag_of: &F) -> Result<Node>
where
    S: ModuleSource,
    F: Fn(&S) -> String,
{
    let type_tag = type_tag_of(source);
    if type_tag.is_empty() {
        return Err(SteerError::MissingTypeTag { path });
    }

    let sources = source.children();
    let mut seen = HashSet::with_capacity(sources.len());
    let mut children = Vec::with_capacity(sources.len());

    for child in sources {
        let name = child.name();
        if name.is_empty() {
            return Err(SteerError::EmptyNodeName {
                parent_path: path.clone(),
            });
        }
        if name.contains('.') {
            return Err(SteerError::InvalidNodeName {
                parent_path: path.clone(),
                name: name.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(SteerError::DuplicateChildName {
                parent_path: path.clone(),
                name: name.to_string(),
            });
        }

        let child_path = if path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", path, name)
        };
        children.push(build_node(child, child_path, type_tag_of)?);
    }

    Ok(Node::new(
        source.name().to_string(),
        type_tag,
        path,
        children,
    ))
}
