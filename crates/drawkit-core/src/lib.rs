//! # DrawKit Core
//!
//! Core types for DrawKit: error taxonomy, integer geometry, RGB color,
//! and the studio event vocabulary shared between the interaction model
//! and presentation layers.

pub mod color;
pub mod error;
pub mod events;
pub mod geometry;

pub use color::Color;
pub use error::{Error, RegistryError, Result, ValidationError};
pub use events::StudioEvent;
pub use geometry::Point;
