pub mod compile;
pub mod explain;
pub mod leaves;
pub mod tree;
