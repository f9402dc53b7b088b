//! 2-D layouts consumed by the drawing panes
//!
//! - [`level_order`]: complete binary tree addressed by array index
//! - [`bisection`]: arbitrary binary search tree, by halving horizontal intervals
//! - [`circular`]: graph nodes evenly spaced on a circle
//!
//! All coordinates are abstract units with `y` growing upwards, so deeper tree
//! levels have smaller `y`. Renderers pick their own bounds and scale.

pub mod bisection;
pub mod circular;
pub mod level_order;

/// Radius of a drawn node
pub const NODE_RADIUS: f64 = 0.2;

/// Vertical distance between tree levels
pub const V_SPACING: f64 = 1.2;

/// Horizontal gap added to each node's diameter in a level-order row
pub const H_MARGIN: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// How an edge should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Normal,
    /// Part of the currently highlighted path
    Emphasized,
}

/// Axis-aligned extent of a set of positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    /// Smallest box containing `positions`, or `None` when there are none
    pub fn of<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut iter = positions.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, p| Bounds {
                min: Position::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Position::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }

    /// Grow the box by `margin` on every side
    pub fn padded(self, margin: f64) -> Self {
        Bounds {
            min: Position::new(self.min.x - margin, self.min.y - margin),
            max: Position::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_positions() {
        let points = [
            Position::new(1.0, -2.0),
            Position::new(-3.0, 0.5),
            Position::new(0.0, 4.0),
        ];
        let bounds = Bounds::of(&points).unwrap();
        assert_eq!(bounds.min, Position::new(-3.0, -2.0));
        assert_eq!(bounds.max, Position::new(1.0, 4.0));

        let padded = bounds.padded(1.0);
        assert_eq!(padded.min, Position::new(-4.0, -3.0));
    }

    #[test]
    fn test_bounds_of_nothing() {
        assert!(Bounds::of(&[] as &[Position]).is_none());
    }
}
