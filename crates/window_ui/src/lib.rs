//! Leptos presentation adapter over [`window_core`]: a provider that owns
//! the store, the draggable window frame wrapper, and the passive window
//! controls strip.

pub mod components;
pub mod runtime_context;

pub use components::{WindowControls, WindowFrame};
pub use runtime_context::{use_window_runtime, WindowProvider, WindowRuntimeContext};
