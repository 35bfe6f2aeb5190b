//! # DrawKit
//!
//! An interactive drawing studio core built around the Prototype pattern:
//! a registry of reusable shape templates is cloned onto a canvas, where
//! each clone is independently selectable, movable, recolored, resized,
//! and relabeled.
//!
//! ## Architecture
//!
//! DrawKit is organized as a workspace:
//!
//! 1. **drawkit-core** - error taxonomy, geometry, color, studio events
//! 2. **drawkit-studio** - prototype registry, canvas model, interaction
//!    controller, and the `StudioState` integration layer
//! 3. **drawkit** - this facade, re-exporting the public API plus logging
//!    setup and a scripted demo binary
//!
//! Presentation concerns (windows, widgets, rendering) are deliberately
//! absent: a UI layer drives the core through [`StudioState`] and redraws
//! from the canvas's selection notifications.

pub use drawkit_core::{Color, Error, Point, RegistryError, Result, StudioEvent, ValidationError};

pub use drawkit_studio::{
    CanvasModel, InteractionController, ObserverHandle, Prototype, PrototypeRegistry,
    ShapeInstance, StudioConfig, StudioState, CLONE_LABEL_SUFFIX, CLONE_OFFSET,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
