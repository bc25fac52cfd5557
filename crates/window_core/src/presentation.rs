//! Pure derivation of per-window presentation state from a [`WindowRecord`].
//!
//! Rendering targets (DOM, canvas, terminal) consume these values; nothing
//! here touches a rendering technology.

use crate::model::WindowRecord;

/// Base class applied to every window frame element.
pub const FRAME_CLASS: &str = "window-frame";
/// Marker class present while a window is maximized.
pub const MAXIMIZED_CLASS: &str = "is-maximized";
/// Marker class present while a window is minimized.
pub const MINIMIZED_CLASS: &str = "is-minimized";
/// One-shot marker class applied while an animated entrance plays.
pub const ENTERING_CLASS: &str = "is-entering";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPresentation {
    /// Shown iff open and not minimized; maximized state never hides.
    pub visible: bool,
    pub maximized: bool,
    pub minimized: bool,
    /// Dragging is disabled while maximized.
    pub draggable: bool,
    pub z_index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a window appears when it transitions from hidden to shown.
pub enum EntryTransition {
    /// Play the one-shot entrance animation.
    Animated,
    /// Appear immediately; a full-bleed maximized layout would fight the
    /// animation.
    Instant,
}

pub fn derive_presentation(record: &WindowRecord) -> WindowPresentation {
    WindowPresentation {
        visible: record.is_open && !record.is_minimized,
        maximized: record.is_maximized,
        minimized: record.is_minimized,
        draggable: !record.is_maximized,
        z_index: record.z_index,
    }
}

pub fn entry_transition(record: &WindowRecord) -> EntryTransition {
    if record.is_maximized {
        EntryTransition::Instant
    } else {
        EntryTransition::Animated
    }
}

/// Class string for a window frame, e.g. `"window-frame is-maximized"`.
pub fn frame_class(record: &WindowRecord) -> String {
    let mut class = String::from(FRAME_CLASS);
    if record.is_maximized {
        class.push(' ');
        class.push_str(MAXIMIZED_CLASS);
    }
    if record.is_minimized {
        class.push(' ');
        class.push_str(MINIMIZED_CLASS);
    }
    class
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowId, WindowSet, WindowSetConfig};
    use crate::reducer::{reduce_windows, WindowAction};

    const GALLERY: WindowId = WindowId::new("gallery");

    fn record_after(actions: &[WindowAction]) -> WindowRecord {
        let mut set = WindowSet::from_config(&WindowSetConfig::new([GALLERY]));
        for action in actions {
            reduce_windows(&mut set, action.clone()).expect("known window");
        }
        set.window(GALLERY).unwrap().clone()
    }

    #[test]
    fn visibility_requires_open_and_not_minimized() {
        let closed = record_after(&[]);
        assert!(!derive_presentation(&closed).visible);

        let open = record_after(&[WindowAction::Open {
            window_id: GALLERY,
            data: None,
        }]);
        assert!(derive_presentation(&open).visible);

        let minimized = record_after(&[
            WindowAction::Open {
                window_id: GALLERY,
                data: None,
            },
            WindowAction::Minimize { window_id: GALLERY },
        ]);
        assert!(!derive_presentation(&minimized).visible);

        let maximized = record_after(&[
            WindowAction::Open {
                window_id: GALLERY,
                data: None,
            },
            WindowAction::Maximize { window_id: GALLERY },
        ]);
        assert!(derive_presentation(&maximized).visible);
    }

    #[test]
    fn dragging_is_gated_on_maximized_only() {
        let open = record_after(&[WindowAction::Open {
            window_id: GALLERY,
            data: None,
        }]);
        assert!(derive_presentation(&open).draggable);

        let maximized = record_after(&[
            WindowAction::Open {
                window_id: GALLERY,
                data: None,
            },
            WindowAction::Maximize { window_id: GALLERY },
        ]);
        assert!(!derive_presentation(&maximized).draggable);
        assert_eq!(entry_transition(&maximized), EntryTransition::Instant);
        assert_eq!(entry_transition(&open), EntryTransition::Animated);
    }

    #[test]
    fn frame_class_carries_the_state_markers() {
        let open = record_after(&[WindowAction::Open {
            window_id: GALLERY,
            data: None,
        }]);
        assert_eq!(frame_class(&open), "window-frame");

        let maximized = record_after(&[
            WindowAction::Open {
                window_id: GALLERY,
                data: None,
            },
            WindowAction::Maximize { window_id: GALLERY },
        ]);
        assert_eq!(frame_class(&maximized), "window-frame is-maximized");

        let minimized = record_after(&[
            WindowAction::Open {
                window_id: GALLERY,
                data: None,
            },
            WindowAction::Minimize { window_id: GALLERY },
        ]);
        assert_eq!(frame_class(&minimized), "window-frame is-minimized");
    }
}
