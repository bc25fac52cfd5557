//! Reducer actions and the state transition engine for the window set.

use serde_json::Value;
use thiserror::Error;

use crate::model::{WindowId, WindowSet};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`] to mutate a [`WindowSet`].
///
/// Unknown-id handling is asymmetric on purpose, matching shipped shell
/// behavior: [`WindowAction::Focus`] reports [`ReducerError::WindowNotFound`]
/// while the other four actions silently no-op. Callers of those four cannot
/// distinguish a no-op from success.
pub enum WindowAction {
    /// Open a window and raise it to the front.
    Open {
        /// Window to open.
        window_id: WindowId,
        /// Payload handed to the window's renderer; `None` keeps the prior
        /// payload in place.
        data: Option<Value>,
    },
    /// Close a window, resetting its record to the seeded closed state.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window to the front, un-minimizing it if needed.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Toggle a window between maximized and restored.
    Maximize {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Minimize a window, keeping its stacking depth for a later focus.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
}

impl WindowAction {
    /// The window this action targets.
    pub fn window_id(&self) -> WindowId {
        match self {
            Self::Open { window_id, .. }
            | Self::Close { window_id }
            | Self::Focus { window_id }
            | Self::Maximize { window_id }
            | Self::Minimize { window_id } => *window_id,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window id is not part of the configured set.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`WindowAction`] to the window set.
///
/// Every action is a single synchronous transition: it either fully applies
/// or (for unknown ids) fully no-ops, and the read-then-increment of the
/// stacking counter inside one action is what keeps raised depths unique.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] only for [`WindowAction::Focus`]
/// on an unknown id; the remaining actions swallow unknown ids silently.
pub fn reduce_windows(set: &mut WindowSet, action: WindowAction) -> Result<(), ReducerError> {
    match action {
        WindowAction::Open { window_id, data } => {
            let Some(record) = set.raise(window_id) else {
                return Ok(());
            };
            record.is_open = true;
            record.is_maximized = false;
            record.is_minimized = false;
            if let Some(data) = data {
                record.data = Some(data);
            }
            Ok(())
        }
        WindowAction::Close { window_id } => {
            let base_z = set.base_z();
            let Some(record) = set.record_mut(window_id) else {
                return Ok(());
            };
            record.is_open = false;
            record.is_maximized = false;
            record.is_minimized = false;
            record.z_index = base_z;
            record.data = None;
            Ok(())
        }
        WindowAction::Focus { window_id } => {
            let Some(record) = set.raise(window_id) else {
                return Err(ReducerError::WindowNotFound);
            };
            if record.is_minimized {
                record.is_minimized = false;
            }
            Ok(())
        }
        WindowAction::Maximize { window_id } => {
            match set.window(window_id).map(|record| record.is_maximized) {
                // Restore leg of the toggle: clear the flag, keep the depth
                // assigned when the window was maximized.
                Some(true) => {
                    if let Some(record) = set.record_mut(window_id) {
                        record.is_maximized = false;
                    }
                    Ok(())
                }
                Some(false) => {
                    let Some(record) = set.raise(window_id) else {
                        return Ok(());
                    };
                    record.is_maximized = true;
                    record.is_minimized = false;
                    Ok(())
                }
                None => Ok(()),
            }
        }
        WindowAction::Minimize { window_id } => {
            let Some(record) = set.record_mut(window_id) else {
                return Ok(());
            };
            record.is_minimized = true;
            record.is_maximized = false;
            Ok(())
        }
    }
}
