//! Circular layout for the traversal graph
//!
//! Distinct nodes are spread evenly around the unit circle in declaration
//! order, starting at angle 0 and going counter-clockwise. The traversal
//! itself never looks at these positions.

use super::Position;
use rustc_hash::{FxHashMap, FxHashSet};
use std::f64::consts::TAU;

pub fn layout<S: AsRef<str>>(nodes: &[S]) -> FxHashMap<String, Position> {
    let mut seen = FxHashSet::default();
    let distinct: Vec<&str> = nodes
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| seen.insert(*n))
        .collect();

    if let [only] = distinct.as_slice() {
        let mut positions = FxHashMap::default();
        positions.insert(only.to_string(), Position::new(0.0, 0.0));
        return positions;
    }

    let count = distinct.len() as f64;
    distinct
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let angle = TAU * i as f64 / count;
            (name.to_string(), Position::new(angle.cos(), angle.sin()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node_centered() {
        let positions = layout(&["A"]);
        assert_eq!(positions["A"], Position::new(0.0, 0.0));
    }

    #[test]
    fn test_nodes_on_unit_circle() {
        let positions = layout(&["A", "B", "C", "D"]);
        assert_eq!(positions.len(), 4);
        assert!((positions["A"].x - 1.0).abs() < 1e-9);
        assert!((positions["B"].y - 1.0).abs() < 1e-9);
        assert!((positions["C"].x + 1.0).abs() < 1e-9);
        for p in positions.values() {
            assert!(((p.x * p.x + p.y * p.y) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_duplicates_share_a_slot() {
        let positions = layout(&["A", "B", "A"]);
        assert_eq!(positions.len(), 2);
        assert!((positions["B"].x + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty() {
        assert!(layout::<&str>(&[]).is_empty());
    }
}
