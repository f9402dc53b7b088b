//! Input error types
//!
//! None of these are fatal: a failed parse only blanks the visualization of
//! the tab it belongs to.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A value could not be converted to the integer type the BST requires
    #[error("'{value}' at position {position} is not an integer")]
    InvalidInteger { value: String, position: usize },

    /// A whole number too large in magnitude for `i64`
    #[error("'{value}' at position {position} is outside the supported range ({min} to {max})", min = i64::MIN, max = i64::MAX)]
    IntegerOutOfRange { value: String, position: usize },

    /// An edge that is not of the `A-B` shape
    #[error("malformed edge '{edge}' (expected A-B)")]
    MalformedEdge { edge: String },
}
