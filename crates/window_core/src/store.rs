//! Explicit window store: owns the [`WindowSet`], applies actions, and
//! notifies per-window observers after each completed mutation.
//!
//! The store is created once by the application root and shared by handle
//! (`Rc<WindowStore>`); there are no hidden statics. It is single-threaded
//! by construction, matching the browser main-thread event model: every
//! dispatch runs synchronously to completion, and observers run after the
//! mutation commits.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use serde_json::Value;

use crate::model::{WindowId, WindowRecord, WindowSet, WindowSetConfig};
use crate::reducer::{reduce_windows, ReducerError, WindowAction};

type ObserverFn = dyn Fn(WindowId, &WindowRecord);

struct ObserverEntry {
    token: u64,
    window_id: WindowId,
    callback: Rc<ObserverFn>,
}

pub struct WindowStore {
    state: RefCell<WindowSet>,
    observers: RefCell<Vec<ObserverEntry>>,
    next_token: Cell<u64>,
}

impl WindowStore {
    pub fn new(config: &WindowSetConfig) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(WindowSet::from_config(config)),
            observers: RefCell::new(Vec::new()),
            next_token: Cell::new(1),
        })
    }

    /// Applies one action and notifies observers of the target window when
    /// its record changed. Silent no-ops (unknown ids, closing an already
    /// closed window) notify nobody.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::WindowNotFound`] for [`WindowAction::Focus`]
    /// on an unknown id; state is left untouched in that case.
    pub fn dispatch(&self, action: WindowAction) -> Result<(), ReducerError> {
        let window_id = action.window_id();
        let before = self.state.borrow().window(window_id).cloned();
        let result = reduce_windows(&mut self.state.borrow_mut(), action);
        if result.is_ok() {
            let after = self.state.borrow().window(window_id).cloned();
            if let Some(record) = after {
                if before.as_ref() != Some(&record) {
                    self.notify(window_id, &record);
                }
            }
        }
        result
    }

    pub fn open(&self, window_id: WindowId, data: Option<Value>) {
        let _ = self.dispatch(WindowAction::Open { window_id, data });
    }

    pub fn close(&self, window_id: WindowId) {
        let _ = self.dispatch(WindowAction::Close { window_id });
    }

    /// Unlike the other four operations, focusing an unknown window reports
    /// the failure to the caller so it can reach the log.
    pub fn focus(&self, window_id: WindowId) -> Result<(), ReducerError> {
        self.dispatch(WindowAction::Focus { window_id })
    }

    pub fn maximize(&self, window_id: WindowId) {
        let _ = self.dispatch(WindowAction::Maximize { window_id });
    }

    pub fn minimize(&self, window_id: WindowId) {
        let _ = self.dispatch(WindowAction::Minimize { window_id });
    }

    /// Snapshot of one window's record. Readers get a clone; the stored
    /// record is only ever mutated through [`WindowStore::dispatch`].
    pub fn window(&self, window_id: WindowId) -> Option<WindowRecord> {
        self.state.borrow().window(window_id).cloned()
    }

    /// Snapshot of the whole set.
    pub fn snapshot(&self) -> WindowSet {
        self.state.borrow().clone()
    }

    pub fn front_window(&self) -> Option<WindowId> {
        self.state.borrow().front_window()
    }

    pub fn open_windows(&self) -> Vec<WindowId> {
        self.state.borrow().open_windows()
    }

    /// Registers an observer for one window. The returned guard unsubscribes
    /// when dropped.
    pub fn subscribe(
        self: &Rc<Self>,
        window_id: WindowId,
        callback: impl Fn(WindowId, &WindowRecord) + 'static,
    ) -> WindowSubscription {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.observers.borrow_mut().push(ObserverEntry {
            token,
            window_id,
            callback: Rc::new(callback),
        });
        WindowSubscription {
            store: Rc::downgrade(self),
            token,
        }
    }

    fn notify(&self, window_id: WindowId, record: &WindowRecord) {
        // Collect first so observers can dispatch further actions or drop
        // subscriptions without hitting a live borrow.
        let callbacks: Vec<Rc<ObserverFn>> = self
            .observers
            .borrow()
            .iter()
            .filter(|entry| entry.window_id == window_id)
            .map(|entry| entry.callback.clone())
            .collect();
        for callback in callbacks {
            callback(window_id, record);
        }
    }
}

/// RAII guard for a store observer; dropping it stops delivery.
pub struct WindowSubscription {
    store: Weak<WindowStore>,
    token: u64,
}

impl Drop for WindowSubscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store
                .observers
                .borrow_mut()
                .retain(|entry| entry.token != self.token);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::WindowSetConfig;

    const EXPLORER: WindowId = WindowId::new("explorer");
    const TERMINAL: WindowId = WindowId::new("terminal");
    const UNKNOWN: WindowId = WindowId::new("paint");

    fn store() -> Rc<WindowStore> {
        WindowStore::new(&WindowSetConfig::new([EXPLORER, TERMINAL]).with_base_z(10))
    }

    fn record_log(
        store: &Rc<WindowStore>,
        window_id: WindowId,
    ) -> (Rc<RefCell<Vec<WindowRecord>>>, WindowSubscription) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let subscription = store.subscribe(window_id, move |_, record| {
            sink.borrow_mut().push(record.clone());
        });
        (log, subscription)
    }

    #[test]
    fn each_completed_action_notifies_the_target_window_once() {
        let store = store();
        let (log, _subscription) = record_log(&store, TERMINAL);

        store.open(TERMINAL, None);
        store.minimize(TERMINAL);
        store.focus(TERMINAL).unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert!(log[0].is_open);
        assert!(log[1].is_minimized);
        assert!(!log[2].is_minimized);
        assert_eq!(log[2].z_index, 12);
    }

    #[test]
    fn silent_no_ops_notify_nobody() {
        let store = store();
        let (terminal_log, _a) = record_log(&store, TERMINAL);
        let (unknown_log, _b) = record_log(&store, UNKNOWN);

        // Already closed, so observable state does not change.
        store.close(TERMINAL);
        store.open(UNKNOWN, Some(json!("ignored")));
        store.maximize(UNKNOWN);

        assert_eq!(terminal_log.borrow().len(), 0);
        assert_eq!(unknown_log.borrow().len(), 0);
    }

    #[test]
    fn focus_on_an_unknown_id_errors_and_leaves_the_set_unchanged() {
        let store = store();
        store.open(EXPLORER, None);
        let before = store.snapshot();

        let result = store.focus(UNKNOWN);

        assert_eq!(result, Err(ReducerError::WindowNotFound));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn dropping_the_subscription_stops_delivery() {
        let store = store();
        let (log, subscription) = record_log(&store, TERMINAL);

        store.open(TERMINAL, None);
        drop(subscription);
        store.minimize(TERMINAL);

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn observers_only_hear_about_their_own_window() {
        let store = store();
        let (log, _subscription) = record_log(&store, TERMINAL);

        store.open(EXPLORER, None);

        assert_eq!(log.borrow().len(), 0);
    }

    #[test]
    fn an_observer_may_dispatch_from_inside_the_notification() {
        let store = store();
        let chained = store.clone();
        let _subscription = store.subscribe(TERMINAL, move |_, record| {
            if record.is_open && !record.is_minimized {
                chained.minimize(TERMINAL);
            }
        });

        store.open(TERMINAL, None);

        assert!(store.window(TERMINAL).unwrap().is_minimized);
    }

    #[test]
    fn stacking_queries_track_open_windows_in_depth_order() {
        let store = store();
        store.open(EXPLORER, None);
        store.open(TERMINAL, None);

        assert_eq!(store.front_window(), Some(TERMINAL));
        assert_eq!(store.open_windows(), vec![EXPLORER, TERMINAL]);

        store.focus(EXPLORER).unwrap();
        assert_eq!(store.front_window(), Some(EXPLORER));
        assert_eq!(store.open_windows(), vec![TERMINAL, EXPLORER]);
    }
}
