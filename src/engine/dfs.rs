//! Depth-first traversal trace
//!
//! The whole traversal is materialized up front as a list of [`StepEvent`]s;
//! stepping through it afterwards is plain indexing. Every event carries its
//! own snapshot of the visited set and the call stack, so any step can be
//! shown without replaying the ones before it.
//!
//! # Event order
//!
//! For each node reached from the start:
//!
//! 1. `Visit`, with visited set and stack captured *before* the node joins
//!    either of them
//! 2. for every still-unvisited neighbor, in ascending order: `Recurse`
//!    (stack includes the current node) followed by that neighbor's events
//! 3. `Backtrack`, with the stack captured just *before* the node is popped

use crate::structures::graph::Adjacency;
use std::collections::BTreeSet;
use tracing::debug;

/// What happened at one traversal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Visit,
    Recurse,
    Backtrack,
}

/// One step of the traversal trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Visit {
        node: String,
        visited: BTreeSet<String>,
        stack: Vec<String>,
        parent: Option<String>,
    },
    Recurse {
        node: String,
        visited: BTreeSet<String>,
        stack: Vec<String>,
        target: String,
    },
    Backtrack {
        node: String,
        visited: BTreeSet<String>,
        stack: Vec<String>,
        parent: Option<String>,
    },
}

impl StepEvent {
    pub fn kind(&self) -> StepKind {
        match self {
            StepEvent::Visit { .. } => StepKind::Visit,
            StepEvent::Recurse { .. } => StepKind::Recurse,
            StepEvent::Backtrack { .. } => StepKind::Backtrack,
        }
    }

    /// The active node
    pub fn node(&self) -> &str {
        match self {
            StepEvent::Visit { node, .. }
            | StepEvent::Recurse { node, .. }
            | StepEvent::Backtrack { node, .. } => node,
        }
    }

    pub fn visited(&self) -> &BTreeSet<String> {
        match self {
            StepEvent::Visit { visited, .. }
            | StepEvent::Recurse { visited, .. }
            | StepEvent::Backtrack { visited, .. } => visited,
        }
    }

    /// Call stack as captured by the event, root first
    pub fn stack(&self) -> &[String] {
        match self {
            StepEvent::Visit { stack, .. }
            | StepEvent::Recurse { stack, .. }
            | StepEvent::Backtrack { stack, .. } => stack,
        }
    }

    /// Stack once this step has taken effect; differs from [`Self::stack`]
    /// only for `Backtrack`, which pops the current node.
    pub fn stack_after(&self) -> &[String] {
        match self {
            StepEvent::Backtrack { stack, .. } => &stack[..stack.len().saturating_sub(1)],
            other => other.stack(),
        }
    }

    /// Edge being followed, for `Recurse` steps
    pub fn highlight_edge(&self) -> Option<(&str, &str)> {
        match self {
            StepEvent::Recurse { node, target, .. } => Some((node, target)),
            _ => None,
        }
    }

    pub fn reasoning(&self) -> String {
        match self {
            StepEvent::Visit { node, stack, .. } => {
                format!("DFS visiting node {}. Stack: {}", node, format_stack(stack))
            }
            StepEvent::Recurse {
                node,
                stack,
                target,
                ..
            } => format!(
                "DFS at node {}, recursing to {}. Stack: {}",
                node,
                target,
                format_stack(stack)
            ),
            StepEvent::Backtrack { node, .. } => format!(
                "DFS backtracking from node {}. Stack after pop: {}",
                node,
                format_stack(self.stack_after())
            ),
        }
    }
}

/// `[A, B, C]`
pub fn format_stack(stack: &[String]) -> String {
    format!("[{}]", stack.join(", "))
}

struct Tracer<'a> {
    adjacency: &'a Adjacency,
    visited: BTreeSet<String>,
    stack: Vec<String>,
    events: Vec<StepEvent>,
}

/// A node whose neighbors are still being walked
struct Frame<I> {
    node: String,
    parent: Option<String>,
    neighbors: I,
}

impl Tracer<'_> {
    fn enter(&mut self, node: &str, parent: Option<&str>) {
        self.events.push(StepEvent::Visit {
            node: node.to_string(),
            visited: self.visited.clone(),
            stack: self.stack.clone(),
            parent: parent.map(str::to_string),
        });
        self.visited.insert(node.to_string());
        self.stack.push(node.to_string());
    }

    fn leave(&mut self, node: String, parent: Option<String>) {
        self.events.push(StepEvent::Backtrack {
            node,
            visited: self.visited.clone(),
            stack: self.stack.clone(),
            parent,
        });
        self.stack.pop();
    }

    /// Walk everything reachable from `start`. Frames live on the heap, so
    /// long paths cannot exhaust the thread stack.
    fn run(&mut self, start: &str) {
        let adjacency = self.adjacency;

        self.enter(start, None);
        let mut frames = vec![Frame {
            node: start.to_string(),
            parent: None,
            neighbors: adjacency.neighbors(start),
        }];

        while let Some(frame) = frames.last_mut() {
            let next = frame
                .neighbors
                .by_ref()
                .find(|neighbor| !self.visited.contains(*neighbor));

            match next {
                Some(neighbor) => {
                    let node = frame.node.clone();
                    self.events.push(StepEvent::Recurse {
                        node: node.clone(),
                        visited: self.visited.clone(),
                        stack: self.stack.clone(),
                        target: neighbor.to_string(),
                    });
                    self.enter(neighbor, Some(&node));
                    frames.push(Frame {
                        node: neighbor.to_string(),
                        parent: Some(node),
                        neighbors: adjacency.neighbors(neighbor),
                    });
                }
                None => {
                    if let Some(done) = frames.pop() {
                        self.leave(done.node, done.parent);
                    }
                }
            }
        }
    }
}

/// Compute the full depth-first trace from `start`.
///
/// Only nodes reachable from `start` appear. A `start` that is not one of the
/// declared `nodes` yields an empty trace.
pub fn trace<S: AsRef<str>>(nodes: &[S], adjacency: &Adjacency, start: &str) -> Vec<StepEvent> {
    let declared = nodes.iter().any(|n| n.as_ref() == start);
    if !declared || !adjacency.contains(start) {
        debug!(start, "start node not declared, empty trace");
        return Vec::new();
    }

    let mut tracer = Tracer {
        adjacency,
        visited: BTreeSet::new(),
        stack: Vec::new(),
        events: Vec::new(),
    };
    tracer.run(start);

    debug!(
        start,
        steps = tracer.events.len(),
        reached = tracer.visited.len(),
        "dfs trace computed"
    );
    tracer.events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_delimited_list, parse_edges};

    fn graph(nodes: &str, edges: &str) -> (Vec<String>, Adjacency) {
        let nodes = parse_delimited_list(nodes);
        let adjacency = Adjacency::from_edges(&nodes, &parse_edges(edges));
        (nodes, adjacency)
    }

    #[test]
    fn test_single_node_without_edges() {
        let (nodes, adj) = graph("A", "");
        let events = trace(&nodes, &adj, "A");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind(), StepKind::Visit);
        assert_eq!(events[1].kind(), StepKind::Backtrack);
        assert_eq!(events[0].reasoning(), "DFS visiting node A. Stack: []");
        assert_eq!(
            events[1].reasoning(),
            "DFS backtracking from node A. Stack after pop: []"
        );
    }

    #[test]
    fn test_snapshots_taken_before_mutation() {
        let (nodes, adj) = graph("A,B", "A-B");
        let events = trace(&nodes, &adj, "A");
        let kinds: Vec<_> = events.iter().map(StepEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Visit,
                StepKind::Recurse,
                StepKind::Visit,
                StepKind::Backtrack,
                StepKind::Backtrack
            ]
        );

        // Visit A: nothing visited yet
        assert!(events[0].visited().is_empty());
        assert!(events[0].stack().is_empty());
        // Recurse A -> B: A is on the stack
        assert_eq!(events[1].stack(), ["A".to_string()]);
        assert_eq!(events[1].highlight_edge(), Some(("A", "B")));
        // Visit B: parent recorded, B not yet visited
        match &events[2] {
            StepEvent::Visit {
                parent, visited, ..
            } => {
                assert_eq!(parent.as_deref(), Some("A"));
                assert!(!visited.contains("B"));
            }
            other => panic!("Expected visit, got {:?}", other),
        }
        // Backtrack B: stack still holds B
        assert_eq!(events[3].stack(), ["A".to_string(), "B".to_string()]);
        assert_eq!(events[3].stack_after(), ["A".to_string()]);
    }

    #[test]
    fn test_neighbors_in_ascending_order() {
        let (nodes, adj) = graph("S,C,B,A", "S-C,S-A,S-B");
        let events = trace(&nodes, &adj, "S");
        let targets: Vec<_> = events
            .iter()
            .filter_map(|e| e.highlight_edge().map(|(_, t)| t.to_string()))
            .collect();
        assert_eq!(targets, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unreachable_nodes_never_appear() {
        let (nodes, adj) = graph("A,B,C,D", "A-B,C-D");
        let events = trace(&nodes, &adj, "A");
        assert!(events.iter().all(|e| e.node() == "A" || e.node() == "B"));
        assert!(!events.last().unwrap().visited().contains("C"));
    }

    #[test]
    fn test_unknown_start_yields_empty_trace() {
        let (nodes, adj) = graph("A,B", "A-B");
        assert!(trace(&nodes, &adj, "Z").is_empty());
        assert!(trace::<String>(&[], &Adjacency::default(), "A").is_empty());
    }

    #[test]
    fn test_long_path_does_not_exhaust_stack() {
        const LEN: usize = 1000;
        let nodes: Vec<String> = (0..LEN).map(|i| format!("N{:04}", i)).collect();
        let edges: Vec<(String, String)> = nodes
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();
        let adj = Adjacency::from_edges(&nodes, &edges);

        // Far too small for one call frame per node
        let events = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(move || trace(&nodes, &adj, "N0000"))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(events.len(), 3 * LEN - 1);
        assert_eq!(events[LEN * 2 - 2].kind(), StepKind::Visit);
        assert_eq!(events[LEN * 2 - 2].node(), "N0999");
        assert_eq!(events[LEN * 2 - 2].stack().len(), LEN - 1);
        let last = events.last().unwrap();
        assert_eq!(last.kind(), StepKind::Backtrack);
        assert_eq!(last.node(), "N0000");
        assert!(last.stack_after().is_empty());
    }

    #[test]
    fn test_recurse_reasoning() {
        let (nodes, adj) = graph("A,B", "A-B");
        let events = trace(&nodes, &adj, "A");
        assert_eq!(
            events[1].reasoning(),
            "DFS at node A, recursing to B. Stack: [A]"
        );
    }
}
