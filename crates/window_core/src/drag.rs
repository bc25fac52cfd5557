//! Scoped drag-gesture wiring for window frames.
//!
//! The gesture physics (pointer tracking, bounds, inertia) live in the host
//! layer; this module only decides who may drag and who is dragging. A
//! [`DragCapability`] is acquired when a frame mounts and released when it
//! unmounts or gets dropped on any other exit path, so the coordinator can
//! never be left pointing at a dead window.

use std::cell::Cell;
use std::rc::Rc;

use crate::model::WindowId;
use crate::reducer::WindowAction;

/// Tracks the single window that owns the active pointer drag. One per
/// desktop surface, shared by every capability on it.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    active: Cell<Option<WindowId>>,
}

impl DragCoordinator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// The window currently being dragged, if any.
    pub fn active_window(&self) -> Option<WindowId> {
        self.active.get()
    }

    fn begin(&self, window_id: WindowId) -> bool {
        match self.active.get() {
            None => {
                self.active.set(Some(window_id));
                true
            }
            Some(owner) => owner == window_id,
        }
    }

    fn end(&self, window_id: WindowId) {
        if self.active.get() == Some(window_id) {
            self.active.set(None);
        }
    }
}

/// Per-window drag handle.
///
/// `set_enabled` is reconfigured whenever the window's maximized flag flips:
/// a maximized window cannot be dragged, and disabling cancels any drag the
/// window still owns.
pub struct DragCapability {
    window_id: WindowId,
    enabled: Cell<bool>,
    coordinator: Rc<DragCoordinator>,
}

impl DragCapability {
    pub fn acquire(
        coordinator: &Rc<DragCoordinator>,
        window_id: WindowId,
        enabled: bool,
    ) -> Self {
        Self {
            window_id,
            enabled: Cell::new(enabled),
            coordinator: coordinator.clone(),
        }
    }

    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        if !enabled {
            self.coordinator.end(self.window_id);
        }
    }

    /// Press gesture on the window surface. Focus is dispatched before any
    /// drag movement is processed; the return value says whether the host
    /// gesture layer may start moving the window.
    pub fn press<F: FnMut(WindowAction)>(&self, mut dispatch: F) -> bool {
        dispatch(WindowAction::Focus {
            window_id: self.window_id,
        });
        if !self.enabled.get() {
            return false;
        }
        self.coordinator.begin(self.window_id)
    }

    /// Ends the drag this window owns, if any. Safe to call unconditionally
    /// on pointer release.
    pub fn end_drag(&self) {
        self.coordinator.end(self.window_id);
    }
}

impl Drop for DragCapability {
    fn drop(&mut self) {
        self.coordinator.end(self.window_id);
    }
}
