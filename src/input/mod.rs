//! Parsing of the raw, comma-separated text typed into each tab
//!
//! - [`parse_delimited_list`]: generic list of trimmed, non-empty entries
//! - [`parse_integers`]: the same list converted to `i64`, rejecting the whole
//!   input on the first bad entry
//! - [`parse_edges`]: `A-B` edge list for the traversal tab
//!
//! # Edge policy
//!
//! Malformed edges (anything other than exactly two non-empty endpoints around
//! a single `-`) are dropped instead of failing the whole list. Edges whose
//! endpoints are not declared nodes are dropped later, when the adjacency is
//! built (see [`crate::structures::graph::Adjacency::from_edges`]).

pub mod errors;

pub use errors::InputError;

use std::num::IntErrorKind;
use tracing::debug;

/// Split on commas, trim whitespace, drop empty entries
pub fn parse_delimited_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated list of integers.
///
/// Fails on the first entry that is not an integer; callers show a warning and
/// suppress the visualization instead of drawing a partial tree.
pub fn parse_integers(raw: &str) -> Result<Vec<i64>, InputError> {
    parse_delimited_list(raw)
        .into_iter()
        .enumerate()
        .map(|(position, value)| match value.parse::<i64>() {
            Ok(n) => Ok(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(InputError::IntegerOutOfRange { value, position })
                }
                _ => Err(InputError::InvalidInteger { value, position }),
            },
        })
        .collect()
}

/// Parse a single `A-B` edge
pub fn parse_edge(raw: &str) -> Result<(String, String), InputError> {
    let malformed = || InputError::MalformedEdge {
        edge: raw.to_string(),
    };

    let mut parts = raw.split('-');
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(malformed());
    }

    Ok((a.to_string(), b.to_string()))
}

/// Parse a comma-separated edge list, silently dropping malformed entries
pub fn parse_edges(raw: &str) -> Vec<(String, String)> {
    parse_delimited_list(raw)
        .iter()
        .filter_map(|entry| match parse_edge(entry) {
            Ok(edge) => Some(edge),
            Err(e) => {
                debug!(%e, "dropping edge");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_list_trims_and_drops_empty() {
        assert_eq!(
            parse_delimited_list(" a, b ,,c ,  "),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(parse_delimited_list("").is_empty());
        assert!(parse_delimited_list(" , ,").is_empty());
    }

    #[test]
    fn test_delimited_list_keeps_duplicates() {
        assert_eq!(parse_delimited_list("x,x").len(), 2);
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_integers("7, 3,-10").unwrap(), vec![7, 3, -10]);
        assert_eq!(parse_integers("").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_integers_rejects_whole_input() {
        match parse_integers("1,2,x,4") {
            Err(InputError::InvalidInteger { value, position }) => {
                assert_eq!(value, "x");
                assert_eq!(position, 2);
            }
            other => panic!("Expected InvalidInteger, got {:?}", other),
        }
        assert!(parse_integers("1.5").is_err());
    }

    #[test]
    fn test_parse_integers_out_of_range() {
        let err = parse_integers("7, 99999999999999999999").unwrap_err();
        assert_eq!(
            err,
            InputError::IntegerOutOfRange {
                value: "99999999999999999999".to_string(),
                position: 1,
            }
        );
        assert!(err.to_string().contains("outside the supported range"));
        assert!(matches!(
            parse_integers("-99999999999999999999"),
            Err(InputError::IntegerOutOfRange { position: 0, .. })
        ));
        assert_eq!(
            parse_integers(&i64::MAX.to_string()).unwrap(),
            vec![i64::MAX]
        );
    }

    #[test]
    fn test_parse_edge_shapes() {
        assert_eq!(
            parse_edge(" A - B ").unwrap(),
            ("A".to_string(), "B".to_string())
        );
        assert!(matches!(parse_edge("AB"), Err(InputError::MalformedEdge { .. })));
        assert!(matches!(parse_edge("A-B-C"), Err(InputError::MalformedEdge { .. })));
        assert!(matches!(parse_edge("A-"), Err(InputError::MalformedEdge { .. })));
        assert!(matches!(parse_edge("-B"), Err(InputError::MalformedEdge { .. })));
    }

    #[test]
    fn test_parse_edges_drops_malformed() {
        let edges = parse_edges("A-B, junk, B-C-D, C-D,");
        assert_eq!(
            edges,
            vec![
                ("A".to_string(), "B".to_string()),
                ("C".to_string(), "D".to_string()),
            ]
        );
    }
}
