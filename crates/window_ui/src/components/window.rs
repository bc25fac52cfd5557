use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use window_core::presentation::{self, EntryTransition};
use window_core::{DragCapability, WindowId};

use crate::runtime_context::use_window_runtime;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Draggable wrapper section for one configured window.
///
/// Derives visibility, class markers, and paint order from the window's
/// record; a press anywhere on the frame focuses the window before any drag
/// movement is processed, and the drag capability is reconfigured whenever
/// the maximized flag flips.
#[component]
pub fn WindowFrame(
    /// Window this frame wraps.
    window_id: WindowId,
    children: Children,
) -> impl IntoView {
    let runtime = use_window_runtime();
    let Some(record) = runtime.record_signal(window_id) else {
        logging::warn!("no configured window for frame \"{window_id}\"");
        return ().into_view();
    };

    let coordinator = runtime.drag_coordinator();
    let initially_draggable =
        presentation::derive_presentation(&record.get_untracked()).draggable;
    let capability = store_value(DragCapability::acquire(
        &coordinator,
        window_id,
        initially_draggable,
    ));

    // The capability is dropped, and the coordinator released, when the
    // frame unmounts.
    create_effect(move |_| {
        let draggable = presentation::derive_presentation(&record.get()).draggable;
        capability.with_value(|capability| capability.set_enabled(draggable));
    });

    // One-shot entrance on hidden -> shown; maximized windows appear
    // instantly instead.
    let entering = create_rw_signal(false);
    create_effect(move |prev_open: Option<bool>| {
        let record = record.get();
        let was_open = prev_open.unwrap_or(false);
        if record.is_open && !was_open {
            entering.set(matches!(
                presentation::entry_transition(&record),
                EntryTransition::Animated
            ));
        } else if !record.is_open {
            entering.set(false);
        }
        record.is_open
    });

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        let may_drag = capability
            .with_value(|capability| capability.press(|action| runtime.dispatch_action(action)));
        if may_drag {
            try_set_pointer_capture(&ev);
        }
    };
    let on_pointerup = move |_ev: web_sys::PointerEvent| {
        capability.with_value(|capability| capability.end_drag());
    };

    let frame_class = move || {
        let record = record.get();
        let mut class = presentation::frame_class(&record);
        if entering.get() {
            class.push(' ');
            class.push_str(presentation::ENTERING_CLASS);
        }
        class
    };
    let frame_style = move || {
        let derived = presentation::derive_presentation(&record.get());
        format!(
            "display:{};z-index:{};",
            if derived.visible { "block" } else { "none" },
            derived.z_index
        )
    };

    view! {
        <section
            id=window_id.as_str()
            class=frame_class
            style=frame_style
            role="dialog"
            on:pointerdown=on_pointerdown
            on:pointerup=on_pointerup
            on:animationend=move |_| entering.set(false)
        >
            {children()}
        </section>
    }
    .into_view()
}
