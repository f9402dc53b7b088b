use algostep::engine::{dfs, StepKind};
use algostep::layout::level_order;
use algostep::steps::StepCursor;
use algostep::structures::{insert_all, Adjacency};
use proptest::prelude::*;
use std::collections::HashSet;

fn node_name(i: usize) -> String {
    format!("N{}", i)
}

proptest! {
    #[test]
    fn level_order_positions_and_edges(count in 0usize..200) {
        let layout = level_order::layout(count);
        prop_assert_eq!(layout.positions.len(), count);
        prop_assert_eq!(layout.edges.len(), count.saturating_sub(1));

        let distinct: HashSet<(u64, u64)> = layout
            .positions
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        prop_assert_eq!(distinct.len(), count);

        for &(parent, child) in &layout.edges {
            prop_assert!(layout.positions[child].y < layout.positions[parent].y);
        }
    }

    #[test]
    fn insertion_path_follows_comparisons(
        values in proptest::collection::vec(-50i64..50, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(values.len());
        let build = insert_all(&values, index).expect("index in range");
        let target = values[index];

        prop_assert!(!build.path.is_empty());
        prop_assert_eq!(*build.path.last().unwrap(), build.inserted);
        prop_assert_eq!(*build.tree.value(build.inserted), target);
        prop_assert_eq!(build.tree.len(), index + 1);

        for pair in build.path.windows(2) {
            let node = build.tree.node(pair[0]);
            let expected = if target < node.value { node.left } else { node.right };
            prop_assert_eq!(expected, Some(pair[1]));
        }
    }

    #[test]
    fn cursor_wraps_after_len_advances(len in 1usize..100, start in 0usize..100) {
        let mut cursor = StepCursor::new(len);
        for _ in 0..start % len {
            cursor.advance();
        }
        let before = cursor.index();
        for _ in 0..len {
            cursor.advance();
        }
        prop_assert_eq!(cursor.index(), before);
        cursor.reset();
        prop_assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn dfs_event_counts_match_spanning_tree(
        node_count in 1usize..12,
        raw_edges in proptest::collection::vec((0usize..12, 0usize..12), 0..30),
    ) {
        let nodes: Vec<String> = (0..node_count).map(node_name).collect();
        let edges: Vec<(String, String)> = raw_edges
            .iter()
            .map(|&(a, b)| (node_name(a), node_name(b)))
            .collect();
        let adjacency = Adjacency::from_edges(&nodes, &edges);
        let trace = dfs::trace(&nodes, &adjacency, &nodes[0]);

        let visited: HashSet<&str> = trace
            .iter()
            .filter(|e| e.kind() == StepKind::Visit)
            .map(|e| e.node())
            .collect();
        let visits = trace.iter().filter(|e| e.kind() == StepKind::Visit).count();
        let backtracks = trace.iter().filter(|e| e.kind() == StepKind::Backtrack).count();
        let recursions = trace.iter().filter(|e| e.kind() == StepKind::Recurse).count();

        prop_assert_eq!(visits, visited.len());
        prop_assert_eq!(backtracks, visits);
        // Spanning tree of the reached component
        prop_assert_eq!(recursions, visits - 1);
        prop_assert_eq!(trace.len(), 3 * visits - 1);
    }
}
