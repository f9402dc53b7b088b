//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tabs`]: Tab bar for the four visualizations
//! - [`input`]: Raw input fields of the active tab, with inline editing
//! - [`array`]: Row of array cells with the scanned element highlighted
//! - [`tree`]: Level-order binary tree on a canvas
//! - [`bst`]: Binary search tree with the insertion path emphasized
//! - [`graph`]: DFS graph with visited/unvisited coloring
//! - [`reasoning`]: Natural-language explanation of the current step
//! - [`status`]: Status bar with keybindings and step position
//! - `utils`: Shared canvas drawing used by the structure panes
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function that takes only the
//! data it draws. Panes never compute layouts or steps themselves.

mod utils;

pub mod array;
pub mod bst;
pub mod graph;
pub mod input;
pub mod reasoning;
pub mod status;
pub mod tabs;
pub mod tree;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use bst::render_bst_pane;
pub use graph::render_graph_pane;
pub use input::{render_input_pane, InputRenderData};
pub use reasoning::{render_reasoning_pane, ReasoningRenderData};
pub use status::render_status_bar;
pub use tabs::render_tabs;
pub use tree::render_tree_pane;
