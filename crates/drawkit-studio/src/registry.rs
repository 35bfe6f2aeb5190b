//! Prototype registry: keyed prototype storage and clone-and-place spawning.

use std::collections::HashMap;

use drawkit_core::{Point, RegistryError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prototype::Prototype;
use crate::shape::ShapeInstance;

/// Spawn jitter range on each axis, in canvas pixels.
const PLACEMENT_JITTER: i32 = 100;
/// Spawned coordinates are clamped to at least this value so new shapes
/// never land fully off a small canvas.
const PLACEMENT_MIN_COORD: i32 = 40;

/// Keyed collection of prototypes.
///
/// Keys are unique prototype names. Registering an existing key overwrites
/// the prior entry in place; enumeration order is insertion order, so list
/// widgets stay stable across edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrototypeRegistry {
    entries: HashMap<String, Prototype>,
    /// Insertion order of keys; kept in lockstep with `entries`.
    order: Vec<String>,
}

impl PrototypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry keyed by the prototype's name.
    ///
    /// A new key is appended to enumeration order; overwriting an existing
    /// key replaces the entry in place and preserves order. Returns `true`
    /// when the key was new.
    pub fn register(&mut self, prototype: Prototype) -> bool {
        let name = prototype.name().to_string();
        let is_new = self.entries.insert(name.clone(), prototype).is_none();
        if is_new {
            self.order.push(name);
        }
        is_new
    }

    /// Looks up a prototype by name.
    pub fn lookup(&self, name: &str) -> Result<&Prototype> {
        self.entries.get(name).ok_or_else(|| {
            RegistryError::NotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Removes the entry for `name` if present.
    ///
    /// Non-strict: removing an absent key is a no-op. Returns whether an
    /// entry was removed. Already-spawned instances are value copies and
    /// are never affected by removal.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.entries.remove(name).is_some() {
            self.order.retain(|k| k != name);
            true
        } else {
            false
        }
    }

    /// Returns a fresh independent copy of the named prototype.
    ///
    /// Editing the returned draft does not touch the registered entry until
    /// the draft is explicitly re-registered.
    pub fn clone_for_editing(&self, name: &str) -> Result<Prototype> {
        self.lookup(name).cloned()
    }

    /// Spawns an instance of the named prototype at a computed placement.
    ///
    /// The position is centered on `(canvas_w / 2, canvas_h / 2)` and
    /// perturbed by an independent uniform offset in [-100, +100] on each
    /// axis, then clamped so each coordinate is at least 40. The jitter
    /// keeps repeated clones visually distinguishable instead of stacking.
    ///
    /// Propagates [`RegistryError::NotFound`] for unknown names; the caller
    /// is expected to hand the instance to
    /// [`crate::CanvasModel::add_instance`].
    pub fn spawn_placement(&self, name: &str, canvas_w: i32, canvas_h: i32) -> Result<ShapeInstance> {
        self.spawn_placement_with(name, canvas_w, canvas_h, &mut rand::rng())
    }

    /// [`Self::spawn_placement`] with an injected random source.
    ///
    /// Tests pass a seeded RNG to pin down the jitter and clamping.
    pub fn spawn_placement_with<R: Rng + ?Sized>(
        &self,
        name: &str,
        canvas_w: i32,
        canvas_h: i32,
        rng: &mut R,
    ) -> Result<ShapeInstance> {
        let prototype = self.lookup(name)?;
        let x = canvas_w / 2 + rng.random_range(-PLACEMENT_JITTER..=PLACEMENT_JITTER);
        let y = canvas_h / 2 + rng.random_range(-PLACEMENT_JITTER..=PLACEMENT_JITTER);
        let position = Point::new(x.max(PLACEMENT_MIN_COORD), y.max(PLACEMENT_MIN_COORD));
        tracing::debug!(prototype = name, %position, "spawn placement computed");
        Ok(prototype.spawn(position))
    }

    /// Returns the current keys in insertion order.
    ///
    /// The returned sequence is a snapshot, not a live view.
    pub fn keys(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Iterates prototypes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Prototype> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Checks whether a prototype is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered prototypes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_core::Color;

    #[test]
    fn test_register_preserves_insertion_order() {
        let mut registry = PrototypeRegistry::new();
        registry.register(Prototype::new("B", 10, Color::RED).unwrap());
        registry.register(Prototype::new("A", 10, Color::RED).unwrap());
        registry.register(Prototype::new("C", 10, Color::RED).unwrap());

        assert_eq!(registry.keys(), vec!["B", "A", "C"]);

        // Overwriting "A" keeps its slot.
        registry.register(Prototype::new("A", 99, Color::MINT).unwrap());
        assert_eq!(registry.keys(), vec!["B", "A", "C"]);
        assert_eq!(registry.lookup("A").unwrap().radius(), 99);
    }

    #[test]
    fn test_clone_for_editing_is_independent() {
        let mut registry = PrototypeRegistry::new();
        registry.register(Prototype::new("Draft", 20, Color::GRAY).unwrap());

        let draft = registry.clone_for_editing("Draft").unwrap();
        // Building a replacement from the draft does not touch the entry.
        let edited = Prototype::new(draft.name(), 50, Color::RED).unwrap();
        assert_eq!(registry.lookup("Draft").unwrap().radius(), 20);

        registry.register(edited);
        assert_eq!(registry.lookup("Draft").unwrap().radius(), 50);
    }
}
