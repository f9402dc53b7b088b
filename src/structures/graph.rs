//! Undirected adjacency for the traversal tab

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Node → neighbors, both kept in ascending lexical order so iteration (and
/// therefore any traversal over it) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: BTreeMap<String, BTreeSet<String>>,
}

impl Adjacency {
    /// Build a symmetric adjacency over the declared `nodes`.
    ///
    /// Every declared node gets an entry, even without edges. An edge whose
    /// endpoints are not both declared is dropped.
    pub fn from_edges<S: AsRef<str>>(nodes: &[S], edges: &[(String, String)]) -> Self {
        let mut neighbors: BTreeMap<String, BTreeSet<String>> = nodes
            .iter()
            .map(|n| (n.as_ref().to_string(), BTreeSet::new()))
            .collect();

        for (a, b) in edges {
            if !neighbors.contains_key(a) || !neighbors.contains_key(b) {
                debug!(from = %a, to = %b, "dropping edge with undeclared endpoint");
                continue;
            }
            if let Some(set) = neighbors.get_mut(a) {
                set.insert(b.clone());
            }
            if let Some(set) = neighbors.get_mut(b) {
                set.insert(a.clone());
            }
        }

        Adjacency { neighbors }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.neighbors.contains_key(node)
    }

    /// Neighbors of `node` in ascending order (empty for unknown nodes)
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = &str> {
        self.neighbors
            .get(node)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Each undirected edge once, as `(smaller, larger)`; self-loops included
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.neighbors
            .iter()
            .flat_map(|(a, set)| {
                set.iter()
                    .filter(move |b| a.as_str() <= b.as_str())
                    .map(move |b| (a.as_str(), b.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_symmetric_and_sorted() {
        let adj = Adjacency::from_edges(&["A", "B", "C"], &[edge("A", "C"), edge("A", "B")]);
        assert_eq!(adj.neighbors("A").collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(adj.neighbors("C").collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(adj.edges(), vec![("A", "B"), ("A", "C")]);
    }

    #[test]
    fn test_undeclared_endpoint_dropped() {
        let adj = Adjacency::from_edges(&["A", "B"], &[edge("A", "Z"), edge("A", "B")]);
        assert_eq!(adj.neighbors("A").collect::<Vec<_>>(), vec!["B"]);
        assert!(!adj.contains("Z"));
        assert_eq!(adj.edges().len(), 1);
    }

    #[test]
    fn test_isolated_nodes_kept() {
        let adj = Adjacency::from_edges(&["A", "B"], &[]);
        assert_eq!(adj.node_count(), 2);
        assert_eq!(adj.neighbors("B").count(), 0);
        assert_eq!(adj.neighbors("missing").count(), 0);
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let adj = Adjacency::from_edges(&["A", "B"], &[edge("A", "B"), edge("B", "A")]);
        assert_eq!(adj.edges(), vec![("A", "B")]);
    }
}
