//! # Introduction
//!
//! algostep steps forward and backward through four classic data-structure
//! algorithms: a linear array scan, level-order construction of a complete
//! binary tree, binary-search-tree insertion, and depth-first graph traversal.
//! Every step names the active element, explains it in a sentence, and comes
//! with a 2-D layout that a renderer can draw without knowing the algorithm.
//!
//! ## Pipeline
//!
//! ```text
//! Raw input → Parsers → Engines → Steps / Trace → Cursor → Layout → TUI
//! ```
//!
//! 1. [`input`]: splits the comma-separated text of each tab and rejects
//!    non-integer BST input.
//! 2. [`structures`]: arena binary search tree and sorted graph adjacency.
//! 3. [`engine`]: turns structures into steps with reasoning; the DFS trace
//!    is computed eagerly, once per input.
//! 4. [`steps`]: wrap-around [`steps::StepCursor`] and the per-tab
//!    [`steps::ViewState`] that resets it when the input changes.
//! 5. [`layout`]: level-order, interval-bisection and circular layouts.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Tie-breaks
//!
//! Duplicate BST values go to the right subtree. Malformed edges and edges to
//! undeclared nodes are dropped without failing the traversal.

pub mod engine;
pub mod input;
pub mod layout;
pub mod steps;
pub mod structures;
pub mod ui;
