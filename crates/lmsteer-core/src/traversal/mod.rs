//! Deterministic traversal of the module tree
//!
//! All traversals are pre-order with children visited in declaration order.
//! That order only drives output iteration; it never affects which rule wins.

pub mod lookup;
pub mod walk;

pub use lookup::{find, require};
pub use walk::{full_path, leaf_set, leaves, walk, Walk};
