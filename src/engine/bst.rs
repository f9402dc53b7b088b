//! BST insertion steps with comparison reasoning

use crate::structures::bst::{insert_all, BstBuild};
use std::fmt::Display;
use tracing::debug;

/// Tree state after inserting the value at `index`, plus why it landed there
#[derive(Debug, Clone)]
pub struct BstStep<V> {
    pub index: usize,
    pub build: BstBuild<V>,
    pub reasoning: String,
}

impl<V: Ord + Clone + Display> BstStep<V> {
    pub fn at(values: &[V], index: usize) -> Option<Self> {
        let build = insert_all(values, index)?;
        let reasoning = insertion_reasoning(&build, index);
        debug!(
            index,
            nodes = build.tree.len(),
            depth = build.path.len() - 1,
            "built bst step"
        );
        Some(BstStep {
            index,
            build,
            reasoning,
        })
    }
}

/// Explain each comparison made on the way down to the inserted node
fn insertion_reasoning<V: Ord + Display>(build: &BstBuild<V>, index: usize) -> String {
    let value = build.tree.value(build.inserted);
    if index == 0 {
        return format!("Inserting {}: Tree is empty, insert as root.", value);
    }

    let mut clauses: Vec<String> = build.path[..build.path.len() - 1]
        .iter()
        .map(|&id| {
            let here = build.tree.value(id);
            if value < here {
                format!("{} < {}, go left.", value, here)
            } else {
                format!("{} >= {}, go right.", value, here)
            }
        })
        .collect();
    clauses.push("Insert here.".to_string());

    format!("Inserting {}: {}", value, clauses.join(" "))
}
