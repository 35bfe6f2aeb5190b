//! Shape prototypes: immutable templates that spawn canvas instances.

use drawkit_core::{Color, Point, ValidationError};
use serde::{Deserialize, Serialize};

use crate::shape::ShapeInstance;

/// An immutable-at-creation shape template.
///
/// A prototype defines the default appearance (radius, color) for instances
/// spawned from it. It has no setters: editing a prototype means building a
/// replacement with [`Prototype::new`] and re-registering it, so cloning can
/// never mutate the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prototype {
    name: String,
    radius: i32,
    color: Color,
}

impl Prototype {
    /// Creates a new prototype.
    ///
    /// Fails with [`ValidationError::EmptyName`] when `name` is empty or
    /// whitespace-only, and [`ValidationError::NonPositiveRadius`] when
    /// `radius <= 0`. Validation happens before anything observes the
    /// value, so a failed construction has no side effects.
    pub fn new(name: impl Into<String>, radius: i32, color: Color) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if radius <= 0 {
            return Err(ValidationError::NonPositiveRadius { radius });
        }
        Ok(Self { name, radius, color })
    }

    /// The registry key for this prototype.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default radius for spawned instances.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Default color for spawned instances.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Spawns a new independent instance of this prototype.
    ///
    /// The instance is labeled `"<name> copy"`, placed at `position`, and
    /// carries the prototype's radius and color. Pure function of the
    /// prototype's current state: spawning never mutates the prototype and
    /// is unaffected by prior spawns. The returned instance is not yet
    /// placed; [`crate::CanvasModel::add_instance`] assigns its identity.
    pub fn spawn(&self, position: Point) -> ShapeInstance {
        ShapeInstance::new(
            format!("{} copy", self.name),
            position,
            self.radius,
            self.color,
        )
    }
}
