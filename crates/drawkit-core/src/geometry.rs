//! Integer geometry for canvas positions.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
///
/// Coordinates are integers on the canvas pixel grid and are unconstrained:
/// positions may be negative or lie outside the visible canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns a new point offset by (dx, dy).
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Translates this point in place by (dx, dy).
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Computed in i128 so even coordinate deltas spanning the full i32
    /// range cannot overflow.
    pub fn distance_squared(&self, other: &Point) -> i128 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
