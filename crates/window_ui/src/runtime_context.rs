//! Runtime provider and context wiring for the window layer.
//!
//! This module owns the long-lived [`WindowStore`] and drag coordinator,
//! mirrors store notifications into per-window signals, and exposes the
//! dispatch callback every component routes actions through. UI composition
//! stays in [`crate::components`].

use std::collections::HashMap;
use std::rc::Rc;

use leptos::*;
use window_core::{
    DragCoordinator, WindowAction, WindowId, WindowRecord, WindowSetConfig, WindowStore,
    WindowSubscription,
};

#[derive(Clone, Copy)]
/// Leptos context for reading window records and dispatching
/// [`WindowAction`] values.
pub struct WindowRuntimeContext {
    store: StoredValue<Rc<WindowStore>>,
    drag: StoredValue<Rc<DragCoordinator>>,
    records: StoredValue<HashMap<WindowId, RwSignal<WindowRecord>>>,
    /// Store dispatch callback.
    pub dispatch: Callback<WindowAction>,
}

impl WindowRuntimeContext {
    /// Dispatches a store action through the runtime callback.
    pub fn dispatch_action(&self, action: WindowAction) {
        self.dispatch.call(action);
    }

    /// Reactive record for one configured window; `None` for ids outside
    /// the static configuration.
    pub fn record_signal(&self, window_id: WindowId) -> Option<RwSignal<WindowRecord>> {
        self.records
            .with_value(|records| records.get(&window_id).copied())
    }

    /// Handle to the underlying store for non-reactive reads.
    pub fn store(&self) -> Rc<WindowStore> {
        self.store.get_value()
    }

    /// The drag coordinator shared by every frame on this desktop surface.
    pub fn drag_coordinator(&self) -> Rc<DragCoordinator> {
        self.drag.get_value()
    }
}

#[component]
/// Provides [`WindowRuntimeContext`] to descendant components.
pub fn WindowProvider(
    /// Static window configuration decided by the application shell.
    config: WindowSetConfig,
    children: Children,
) -> impl IntoView {
    let store = WindowStore::new(&config);
    let drag = DragCoordinator::new();

    let mut records = HashMap::new();
    let mut subscriptions: Vec<WindowSubscription> = Vec::new();
    let snapshot = store.snapshot();
    for (window_id, record) in snapshot.windows() {
        let signal = create_rw_signal(record.clone());
        subscriptions.push(store.subscribe(window_id, move |_, record| {
            signal.set(record.clone());
        }));
        records.insert(window_id, signal);
    }

    let dispatch_store = store.clone();
    let dispatch = Callback::new(move |action: WindowAction| {
        if let Err(err) = dispatch_store.dispatch(action) {
            logging::warn!("window action failed: {err}");
        }
    });

    let runtime = WindowRuntimeContext {
        store: store_value(store),
        drag: store_value(drag),
        records: store_value(records),
        dispatch,
    };
    provide_context(runtime);

    // Dropping the guards detaches the store observers with them.
    on_cleanup(move || drop(subscriptions));

    children()
}

/// Returns the ambient [`WindowRuntimeContext`].
///
/// # Panics
///
/// Panics when called outside a [`WindowProvider`] subtree.
pub fn use_window_runtime() -> WindowRuntimeContext {
    use_context::<WindowRuntimeContext>().expect("WindowRuntimeContext not provided")
}
