//! Level-order construction of a complete binary tree

/// Which side of its parent a node hangs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Parent index of `index` in level order (`None` for the root)
pub fn parent_of(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

/// Placement of the node at `index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStep {
    pub index: usize,
    pub value: String,
    /// Parent index and the side the node is attached on
    pub parent: Option<(usize, Side)>,
    pub reasoning: String,
}

impl TreeStep {
    pub fn at<S: AsRef<str>>(values: &[S], index: usize) -> Option<Self> {
        let value = values.get(index)?.as_ref().to_string();

        let parent = parent_of(index).map(|p| {
            let side = if index == 2 * p + 1 {
                Side::Left
            } else {
                Side::Right
            };
            (p, side)
        });

        let reasoning = match parent {
            None => format!("Placing root node with value {}.", value),
            Some((p, side)) => format!(
                "Placing node with value {} as {} child of node {}.",
                value,
                side.as_str(),
                values[p].as_ref()
            ),
        };

        Some(TreeStep {
            index,
            value,
            parent,
            reasoning,
        })
    }
}
