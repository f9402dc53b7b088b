//! Step generation for the four visualizations
//!
//! Each engine turns parsed input into steps that carry the active element
//! and a sentence explaining it:
//! - [`array`]: linear scan
//! - [`tree`]: complete binary tree filled in level order
//! - [`bst`]: binary search tree insertion, one step per inserted value
//! - [`dfs`]: depth-first traversal, precomputed as a full trace
//!
//! # Execution Model
//!
//! Engines are pure functions of their input. The array, tree and BST steps
//! are cheap enough to rebuild for whichever index the cursor is on; the DFS
//! trace is built once per input and indexed afterwards.

pub mod array;
pub mod bst;
pub mod dfs;
pub mod tree;

pub use array::ArrayStep;
pub use bst::BstStep;
pub use dfs::{trace, StepEvent, StepKind};
pub use tree::TreeStep;
