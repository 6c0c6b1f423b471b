pub mod leaf;
pub mod node;
pub mod rule;
pub mod source;
pub mod steering;

pub use leaf::Leaf;
pub use node::{Node, NodeDetails};
pub use rule::{Action, Rule, RuleId, RuleKind};
pub use source::{build_tree, ModuleSource, ModuleSpec};
pub use steering::{CaptureRecord, SteeringAction, SteeringConfig};
