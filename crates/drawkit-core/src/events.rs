//! Studio event vocabulary.
//!
//! `StudioEvent` describes the human-visible things that happen in the
//! studio. Presentation layers subscribe to these purely for informational
//! messaging (status bars, activity logs); no control flow depends on them.

/// Studio event types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioEvent {
    /// A prototype was registered (new key)
    PrototypeRegistered {
        /// Registry key of the new prototype.
        name: String,
    },
    /// An existing prototype entry was overwritten
    PrototypeUpdated {
        /// Registry key that was overwritten.
        name: String,
    },
    /// A prototype was removed from the registry
    PrototypeRemoved {
        /// Registry key that was removed.
        name: String,
    },
    /// A prototype was cloned onto the canvas
    ShapeSpawned {
        /// Registry key of the source prototype.
        prototype: String,
        /// Label of the spawned instance.
        label: String,
    },
    /// A live instance was duplicated in place (double-click clone)
    ShapeCloned {
        /// Label of the source instance.
        source: String,
    },
    /// The canvas selection changed
    SelectionChanged {
        /// Label of the newly selected instance, or `None` when cleared.
        label: Option<String>,
    },
    /// The selected instance was recolored
    ColorApplied {
        /// Label of the recolored instance.
        label: String,
    },
    /// The selected instance was resized
    RadiusApplied {
        /// Label of the resized instance.
        label: String,
        /// The new radius.
        radius: i32,
    },
    /// The selected instance was relabeled
    LabelApplied {
        /// The new label.
        label: String,
    },
}

impl std::fmt::Display for StudioEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudioEvent::PrototypeRegistered { name } => {
                write!(f, "New prototype '{}' registered", name)
            }
            StudioEvent::PrototypeUpdated { name } => {
                write!(f, "Prototype '{}' updated", name)
            }
            StudioEvent::PrototypeRemoved { name } => {
                write!(f, "Prototype '{}' removed", name)
            }
            StudioEvent::ShapeSpawned { prototype, label } => {
                write!(f, "Cloned prototype '{}' -> placed '{}' on canvas", prototype, label)
            }
            StudioEvent::ShapeCloned { source } => {
                write!(f, "Cloned shape '{}' via double-click", source)
            }
            StudioEvent::SelectionChanged { label } => match label {
                Some(label) => write!(f, "Selected '{}'", label),
                None => write!(f, "Selection cleared"),
            },
            StudioEvent::ColorApplied { label } => {
                write!(f, "Changed color of '{}'", label)
            }
            StudioEvent::RadiusApplied { label, radius } => {
                write!(f, "Size of '{}' adjusted to {}", label, radius)
            }
            StudioEvent::LabelApplied { label } => {
                write!(f, "Label applied: {}", label)
            }
        }
    }
}
