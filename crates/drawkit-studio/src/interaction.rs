//! Pointer gesture handling: press, drag, release, double-click.

use drawkit_core::Point;

use crate::canvas::CanvasModel;

/// Capture state while a drag is in progress.
#[derive(Debug, Clone, Copy)]
struct DragState {
    /// The instance being dragged.
    id: u64,
    /// Last pointer position; deltas are computed against this.
    last: Point,
}

/// Translates raw pointer gestures against a [`CanvasModel`] into
/// pick/select/move/clone operations.
///
/// A two-state machine: Idle, and Dragging with a captured instance.
/// Gesture events are processed strictly in delivery order and each one is
/// fully applied, observer notifications included, before the next.
#[derive(Debug, Default)]
pub struct InteractionController {
    drag: Option<DragState>,
}

impl InteractionController {
    /// Creates a controller in the Idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer press at (x, y).
    ///
    /// A hit selects the topmost instance under the pointer and enters
    /// Dragging with the press point recorded. A miss clears the selection
    /// and stays Idle. Returns the hit instance's id, if any.
    pub fn on_press(&mut self, canvas: &mut CanvasModel, x: i32, y: i32) -> Option<u64> {
        match canvas.topmost_at(x, y).map(|s| s.id()) {
            Some(id) => {
                canvas.set_selected(Some(id));
                self.drag = Some(DragState {
                    id,
                    last: Point::new(x, y),
                });
                Some(id)
            }
            None => {
                canvas.set_selected(None);
                self.drag = None;
                None
            }
        }
    }

    /// Pointer moved to (x, y) while the button is held.
    ///
    /// While Dragging, translates the captured instance by the delta from
    /// the last recorded point and advances the recorded point. Ignored in
    /// Idle.
    pub fn on_drag(&mut self, canvas: &mut CanvasModel, x: i32, y: i32) {
        let Some(drag) = self.drag else {
            return;
        };
        let current = Point::new(x, y);
        let (dx, dy) = (current.x - drag.last.x, current.y - drag.last.y);
        if canvas.move_instance(drag.id, dx, dy) {
            self.drag = Some(DragState {
                id: drag.id,
                last: current,
            });
        } else {
            // The captured instance left the canvas; drop the capture.
            tracing::warn!(id = drag.id, "dragged instance no longer on canvas");
            self.drag = None;
        }
    }

    /// Pointer released.
    ///
    /// Drops the captured instance reference; the instance itself is not
    /// mutated.
    pub fn on_release(&mut self) {
        self.drag = None;
    }

    /// Double-click at (x, y).
    ///
    /// Independent of drag state: a hit clones the hit instance in place
    /// via [`CanvasModel::clone_in_place`]. Returns the clone's id, if any.
    pub fn on_double_click(&mut self, canvas: &mut CanvasModel, x: i32, y: i32) -> Option<u64> {
        let hit = canvas.topmost_at(x, y).map(|s| s.id())?;
        canvas.clone_in_place(hit)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
