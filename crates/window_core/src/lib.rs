//! Window state machine and stacking-order policy for a browser-based
//! desktop shell.
//!
//! The store holds one record per statically configured window id and
//! mutates it exclusively through five actions (open, close, focus,
//! maximize, minimize). Stacking depth comes from a process-wide counter
//! that only ever increases, so the most recently raised open window always
//! paints on top without timestamps. Presentation layers consume the pure
//! derivation contract in [`presentation`] and the scoped drag wiring in
//! [`drag`].

pub mod drag;
pub mod model;
pub mod presentation;
pub mod reducer;
pub mod store;

pub use drag::{DragCapability, DragCoordinator};
pub use model::{WindowId, WindowRecord, WindowSet, WindowSetConfig, DEFAULT_BASE_Z};
pub use presentation::{
    derive_presentation, entry_transition, frame_class, EntryTransition, WindowPresentation,
};
pub use reducer::{reduce_windows, ReducerError, WindowAction};
pub use store::{WindowStore, WindowSubscription};
