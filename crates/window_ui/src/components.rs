//! Window frame and control-strip components.

mod controls;
mod window;

pub use controls::WindowControls;
pub use window::WindowFrame;

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
