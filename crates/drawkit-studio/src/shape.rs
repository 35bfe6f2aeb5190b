//! Shape instances: placed, independently mutable drawable objects.

use drawkit_core::{Color, Point, ValidationError};
use serde::{Deserialize, Serialize};

/// A drawable object placed on the canvas.
///
/// Instances have value semantics on clone: two instances spawned from the
/// same prototype (or from each other) share no state, and mutating one
/// never affects the other or the source prototype.
///
/// Identity is the `id` assigned by [`crate::CanvasModel`] when the
/// instance is added; an id of 0 means "not yet placed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeInstance {
    id: u64,
    label: String,
    position: Point,
    radius: i32,
    color: Color,
}

impl ShapeInstance {
    /// Creates a new, not-yet-placed instance.
    pub fn new(label: impl Into<String>, position: Point, radius: i32, color: Color) -> Self {
        debug_assert!(radius > 0, "radius must be positive, got {radius}");
        Self {
            id: 0,
            label: label.into(),
            position,
            radius,
            color,
        }
    }

    /// Canvas-assigned identity (0 until placed).
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Positions are unconstrained; an instance may sit off-canvas.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Sets the radius, rejecting non-positive values.
    ///
    /// The `radius > 0` invariant holds at all times, so a rejected edit
    /// leaves the instance unchanged.
    pub fn set_radius(&mut self, radius: i32) -> Result<(), ValidationError> {
        if radius <= 0 {
            return Err(ValidationError::NonPositiveRadius { radius });
        }
        self.radius = radius;
        Ok(())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Translates the instance by (dx, dy).
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position.translate(dx, dy);
    }

    /// Hit-test: is (x, y) inside this circular instance?
    ///
    /// Squared Euclidean distance against squared radius, avoiding a
    /// square root. Computed in i128 so far-off-canvas coordinates cannot
    /// overflow.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let r = i128::from(self.radius);
        self.position.distance_squared(&Point::new(x, y)) <= r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: i32, y: i32, radius: i32) -> ShapeInstance {
        ShapeInstance::new("test", Point::new(x, y), radius, Color::RED)
    }

    #[test]
    fn test_contains_center_and_boundary() {
        let shape = circle(50, 50, 10);
        // Center is always contained.
        assert!(shape.contains(50, 50));
        // Exactly on the rim counts as contained.
        assert!(shape.contains(60, 50));
        // One past the rim along an axis never is.
        assert!(!shape.contains(61, 50));
        assert!(!shape.contains(50, 61));
    }

    #[test]
    fn test_contains_far_coordinates_no_overflow() {
        let shape = circle(i32::MAX - 10, i32::MIN + 10, 5);
        assert!(!shape.contains(i32::MIN + 10, i32::MAX - 10));
    }

    #[test]
    fn test_move_by_accumulates() {
        let mut shape = circle(0, 0, 10);
        shape.move_by(5, -3);
        shape.move_by(-15, 3);
        assert_eq!(shape.position(), Point::new(-10, 0));
    }

    #[test]
    fn test_set_radius_rejects_invalid() {
        let mut shape = circle(0, 0, 10);
        assert_eq!(
            shape.set_radius(0),
            Err(ValidationError::NonPositiveRadius { radius: 0 })
        );
        // Rejected edit leaves the instance unchanged.
        assert_eq!(shape.radius(), 10);

        shape.set_radius(25).unwrap();
        assert_eq!(shape.radius(), 25);
    }
}
