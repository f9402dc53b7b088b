//! Data structures the engines build from parsed input
//!
//! - [`bst`]: arena binary search tree with path-recording insertion
//! - [`graph`]: sorted, symmetric adjacency for depth-first traversal

pub mod bst;
pub mod graph;

pub use bst::{insert_all, Bst, BstBuild, BstNode, NodeId};
pub use graph::Adjacency;
