//! Canvas model: ordered shape instances and single-selection tracking.

use uuid::Uuid;

use crate::shape::ShapeInstance;

/// Fixed label suffix appended by [`CanvasModel::clone_in_place`].
pub const CLONE_LABEL_SUFFIX: &str = " (copy)";
/// Fixed position offset applied by [`CanvasModel::clone_in_place`].
pub const CLONE_OFFSET: (i32, i32) = (30, 30);

/// Handle for a registered selection observer.
///
/// Uniquely identifies a subscription; pass it to
/// [`CanvasModel::unsubscribe_selection`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(Uuid);

impl ObserverHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

type SelectionObserver = Box<dyn FnMut(Option<&ShapeInstance>)>;

/// Owns the ordered collection of live shape instances and tracks the
/// single selected instance.
///
/// Z-order is sequence order: the last instance is topmost. `selected`,
/// when present, always refers to an instance currently on the canvas;
/// removal of the selected instance clears the selection rather than
/// leaving a dangling reference.
///
/// All mutation happens through this type's methods on a single logical
/// thread; observer notification is synchronous and completes before the
/// mutating call returns.
pub struct CanvasModel {
    instances: Vec<ShapeInstance>,
    selected: Option<u64>,
    observers: Vec<(ObserverHandle, SelectionObserver)>,
    next_id: u64,
}

impl CanvasModel {
    /// Creates an empty canvas model.
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            selected: None,
            observers: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique instance ID.
    fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends an instance (it becomes topmost) and selects it.
    ///
    /// Assigns the instance's canvas identity and returns it. Observers are
    /// notified exactly once, for the selection change.
    pub fn add_instance(&mut self, mut instance: ShapeInstance) -> u64 {
        let id = self.generate_id();
        instance.set_id(id);
        self.instances.push(instance);
        self.set_selected(Some(id));
        id
    }

    /// Updates the selection and notifies observers.
    ///
    /// Notifies on every accepted call, even when the new selection equals
    /// the old one: presentation layers rely on the idempotent
    /// re-notification to refresh. A `Some(id)` that is not a current
    /// member of the canvas is silently ignored (no state change, no
    /// notification); in practice selection is only ever set from a
    /// successful hit-test, so this guards against stale collaborator ids.
    pub fn set_selected(&mut self, selection: Option<u64>) {
        if let Some(id) = selection {
            if self.get(id).is_none() {
                tracing::warn!(id, "ignoring selection of unknown instance");
                return;
            }
        }
        self.selected = selection;
        self.notify_selection();
    }

    /// Registers a selection observer.
    ///
    /// Observers are invoked synchronously, in subscription order, with the
    /// current selection (or `None`) on every accepted
    /// [`Self::set_selected`] call.
    pub fn subscribe_selection(
        &mut self,
        observer: impl FnMut(Option<&ShapeInstance>) + 'static,
    ) -> ObserverHandle {
        let handle = ObserverHandle::new();
        self.observers.push((handle, Box::new(observer)));
        handle
    }

    /// Removes a selection observer. Returns whether it was registered.
    pub fn unsubscribe_selection(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(h, _)| *h != handle);
        self.observers.len() != before
    }

    fn notify_selection(&mut self) {
        let snapshot = self
            .selected
            .and_then(|id| self.get(id))
            .cloned();
        // Taken out so callbacks never alias the model while it is borrowed.
        let mut observers = std::mem::take(&mut self.observers);
        for (_, observer) in observers.iter_mut() {
            observer(snapshot.as_ref());
        }
        self.observers = observers;
    }

    /// Hit-test in reverse z-order (topmost first).
    ///
    /// Returns the first instance containing (x, y), or `None`.
    pub fn topmost_at(&self, x: i32, y: i32) -> Option<&ShapeInstance> {
        self.instances.iter().rev().find(|s| s.contains(x, y))
    }

    /// Duplicates a live instance in place.
    ///
    /// The clone keeps the source's radius and color, takes the source's
    /// label suffixed with [`CLONE_LABEL_SUFFIX`], and sits at the source
    /// position offset by [`CLONE_OFFSET`]. It is appended and selected
    /// exactly like [`Self::add_instance`]. This duplicates a live
    /// instance, not a registered template, and never touches the registry.
    ///
    /// Returns the clone's id, or `None` when `id` is not on the canvas.
    pub fn clone_in_place(&mut self, id: u64) -> Option<u64> {
        let source = self.get(id)?;
        let (dx, dy) = CLONE_OFFSET;
        let mut clone = source.clone();
        clone.set_label(format!("{}{}", source.label(), CLONE_LABEL_SUFFIX));
        clone.set_position(source.position().offset(dx, dy));
        Some(self.add_instance(clone))
    }

    /// Removes an instance from the canvas.
    ///
    /// Removing the current selection clears the selection (observers are
    /// notified with `None`), so no dangling reference survives.
    pub fn remove_instance(&mut self, id: u64) -> Option<ShapeInstance> {
        let index = self.instances.iter().position(|s| s.id() == id)?;
        let removed = self.instances.remove(index);
        if self.selected == Some(id) {
            self.set_selected(None);
        }
        Some(removed)
    }

    /// Read-only snapshot of the instances in z-order (last is topmost).
    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    /// Id of the selected instance, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    /// The selected instance, if any.
    pub fn selected(&self) -> Option<&ShapeInstance> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Gets an instance by id.
    pub fn get(&self, id: u64) -> Option<&ShapeInstance> {
        self.instances.iter().find(|s| s.id() == id)
    }

    /// Gets an instance by id, mutably.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut ShapeInstance> {
        self.instances.iter_mut().find(|s| s.id() == id)
    }

    /// Translates an instance by (dx, dy). Returns whether it exists.
    pub fn move_instance(&mut self, id: u64, dx: i32, dy: i32) -> bool {
        match self.get_mut(id) {
            Some(instance) => {
                instance.move_by(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Number of instances on the canvas.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the canvas is empty.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for CanvasModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CanvasModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasModel")
            .field("instances", &self.instances)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}
