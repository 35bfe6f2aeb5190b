//! # DrawKit Studio
//!
//! The core interaction model of the drawing studio. It demonstrates the
//! Prototype pattern: a registry of reusable shape templates that are
//! cloned onto a canvas, where each clone is independently selectable,
//! movable, recolored, resized, and relabeled.
//!
//! ## Core Components
//!
//! - **Prototype**: an immutable template (name, radius, color) that can
//!   spawn new independent instances
//! - **PrototypeRegistry**: keyed collection of prototypes with
//!   registration, lookup, removal, and clone-and-place spawning
//! - **ShapeInstance**: a placed, independently mutable drawable object
//! - **CanvasModel**: ordered shape collection, single-selection tracking,
//!   and synchronous selection notification
//! - **InteractionController**: translates pointer gestures into
//!   pick/select/move/clone operations
//! - **StudioState**: integration layer wiring the registry, canvas, and
//!   controller together for presentation code
//!
//! ## Usage
//!
//! ```rust
//! use drawkit_studio::StudioState;
//!
//! let mut studio = StudioState::with_default_prototypes();
//! let id = studio.spawn_from_prototype("Tiny Red").unwrap();
//! assert_eq!(studio.canvas.selected_id(), Some(id));
//! ```

pub mod canvas;
pub mod interaction;
pub mod prototype;
pub mod registry;
pub mod shape;
pub mod studio;

pub use canvas::{CanvasModel, ObserverHandle, CLONE_LABEL_SUFFIX, CLONE_OFFSET};
pub use interaction::InteractionController;
pub use prototype::Prototype;
pub use registry::PrototypeRegistry;
pub use shape::ShapeInstance;
pub use studio::{StudioConfig, StudioState};

// Re-export the core vocabulary so presentation code needs one import path.
pub use drawkit_core::{Color, Error, Point, RegistryError, Result, StudioEvent, ValidationError};
