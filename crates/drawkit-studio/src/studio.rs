//! Studio state manager for presentation integration.
//!
//! Wires the prototype registry, canvas model, and interaction controller
//! together and reports human-readable [`StudioEvent`]s to optional sinks.

use drawkit_core::{Color, Result, StudioEvent, ValidationError};
use rand::Rng;

use crate::canvas::CanvasModel;
use crate::interaction::InteractionController;
use crate::prototype::Prototype;
use crate::registry::PrototypeRegistry;

/// Canvas geometry supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudioConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 480,
        }
    }
}

type EventSink = Box<dyn FnMut(&StudioEvent)>;

/// Top-level studio state for presentation integration.
///
/// Owns the registry, canvas, and controller; presentation code calls in
/// through this type and refreshes from the canvas's selection
/// notifications. Event sinks are purely informational: no control flow
/// depends on them.
pub struct StudioState {
    pub registry: PrototypeRegistry,
    pub canvas: CanvasModel,
    pub controller: InteractionController,
    pub config: StudioConfig,
    sinks: Vec<EventSink>,
}

impl StudioState {
    /// Creates an empty studio with the default 600x480 canvas.
    pub fn new() -> Self {
        Self::with_config(StudioConfig::default())
    }

    /// Creates an empty studio with the given canvas geometry.
    pub fn with_config(config: StudioConfig) -> Self {
        Self {
            registry: PrototypeRegistry::new(),
            canvas: CanvasModel::new(),
            controller: InteractionController::new(),
            config,
            sinks: Vec::new(),
        }
    }

    /// Creates a studio seeded with the stock prototype palette:
    /// "Tiny Red" (r=30), "Blue Burst" (r=70), "Mint Medium" (r=50).
    pub fn with_default_prototypes() -> Self {
        let mut studio = Self::new();
        for (name, radius, color) in [
            ("Tiny Red", 30, Color::RED),
            ("Blue Burst", 70, Color::DODGER_BLUE),
            ("Mint Medium", 50, Color::MINT),
        ] {
            let prototype =
                Prototype::new(name, radius, color).expect("stock prototype values are valid");
            studio.registry.register(prototype);
        }
        studio
    }

    /// Registers a sink for human-readable studio events.
    pub fn subscribe_events(&mut self, sink: impl FnMut(&StudioEvent) + 'static) {
        self.sinks.push(Box::new(sink));
    }

    fn emit(&mut self, event: StudioEvent) {
        tracing::info!(%event, "studio event");
        for sink in self.sinks.iter_mut() {
            sink(&event);
        }
    }

    /// Registers a prototype, keyed by its current name.
    ///
    /// Overwrites any existing entry under that key. A renamed edit
    /// deliberately leaves the previous key registered; callers that want
    /// the old key gone remove it explicitly via
    /// [`Self::remove_prototype`].
    pub fn register_prototype(&mut self, prototype: Prototype) {
        let name = prototype.name().to_string();
        let is_new = self.registry.register(prototype);
        if is_new {
            self.emit(StudioEvent::PrototypeRegistered { name });
        } else {
            self.emit(StudioEvent::PrototypeUpdated { name });
        }
    }

    /// Removes a prototype. Returns whether an entry was removed.
    ///
    /// Instances already spawned from the prototype are value copies and
    /// stay on the canvas untouched.
    pub fn remove_prototype(&mut self, name: &str) -> bool {
        let removed = self.registry.remove(name);
        if removed {
            self.emit(StudioEvent::PrototypeRemoved {
                name: name.to_string(),
            });
        }
        removed
    }

    /// Returns an independent draft copy of a prototype for an edit dialog.
    pub fn clone_prototype_for_editing(&self, name: &str) -> Result<Prototype> {
        self.registry.clone_for_editing(name)
    }

    /// Spawns the named prototype onto the canvas and selects the result.
    ///
    /// Placement is the registry's jittered clone-and-place computation for
    /// the configured canvas size. Returns the new instance's id.
    pub fn spawn_from_prototype(&mut self, name: &str) -> Result<u64> {
        self.spawn_from_prototype_with(name, &mut rand::rng())
    }

    /// [`Self::spawn_from_prototype`] with an injected random source.
    pub fn spawn_from_prototype_with<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        rng: &mut R,
    ) -> Result<u64> {
        let instance = self.registry.spawn_placement_with(
            name,
            self.config.canvas_width,
            self.config.canvas_height,
            rng,
        )?;
        let label = instance.label().to_string();
        let id = self.canvas.add_instance(instance);
        self.emit(StudioEvent::ShapeSpawned {
            prototype: name.to_string(),
            label,
        });
        Ok(id)
    }

    /// Pointer press gesture from the presentation layer.
    pub fn pointer_pressed(&mut self, x: i32, y: i32) -> Option<u64> {
        let hit = self.controller.on_press(&mut self.canvas, x, y);
        let label = self.canvas.selected().map(|s| s.label().to_string());
        self.emit(StudioEvent::SelectionChanged { label });
        hit
    }

    /// Pointer drag gesture from the presentation layer.
    pub fn pointer_dragged(&mut self, x: i32, y: i32) {
        self.controller.on_drag(&mut self.canvas, x, y);
    }

    /// Pointer release gesture from the presentation layer.
    pub fn pointer_released(&mut self) {
        self.controller.on_release();
    }

    /// Double-click gesture from the presentation layer.
    pub fn pointer_double_clicked(&mut self, x: i32, y: i32) -> Option<u64> {
        let source = self
            .canvas
            .topmost_at(x, y)
            .map(|s| s.label().to_string())?;
        let clone_id = self.controller.on_double_click(&mut self.canvas, x, y)?;
        self.emit(StudioEvent::ShapeCloned { source });
        Some(clone_id)
    }

    /// Recolors the selected instance. Returns false when nothing is
    /// selected.
    pub fn apply_color(&mut self, color: Color) -> bool {
        let Some(id) = self.canvas.selected_id() else {
            return false;
        };
        let Some(instance) = self.canvas.get_mut(id) else {
            return false;
        };
        instance.set_color(color);
        let label = instance.label().to_string();
        self.emit(StudioEvent::ColorApplied { label });
        true
    }

    /// Resizes the selected instance.
    ///
    /// `Ok(false)` when nothing is selected; a non-positive radius is
    /// rejected with no state change.
    pub fn apply_radius(&mut self, radius: i32) -> std::result::Result<bool, ValidationError> {
        let Some(id) = self.canvas.selected_id() else {
            return Ok(false);
        };
        let Some(instance) = self.canvas.get_mut(id) else {
            return Ok(false);
        };
        instance.set_radius(radius)?;
        let label = instance.label().to_string();
        self.emit(StudioEvent::RadiusApplied { label, radius });
        Ok(true)
    }

    /// Relabels the selected instance. Returns false when nothing is
    /// selected.
    pub fn apply_label(&mut self, label: impl Into<String>) -> bool {
        let Some(id) = self.canvas.selected_id() else {
            return false;
        };
        let label = label.into();
        let Some(instance) = self.canvas.get_mut(id) else {
            return false;
        };
        instance.set_label(label.clone());
        self.emit(StudioEvent::LabelApplied { label });
        true
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StudioState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioState")
            .field("registry", &self.registry)
            .field("canvas", &self.canvas)
            .field("controller", &self.controller)
            .field("config", &self.config)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
