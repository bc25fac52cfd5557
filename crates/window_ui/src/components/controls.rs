use leptos::*;
use window_core::{WindowAction, WindowId};

use super::stop_pointer_event;
use crate::runtime_context::use_window_runtime;

/// Passive strip of close / minimize / maximize-or-restore buttons for one
/// window. Each button maps 1:1 onto a store action; the strip never reads
/// anything but the target's record.
#[component]
pub fn WindowControls(
    /// Window the strip operates on.
    target: WindowId,
) -> impl IntoView {
    let runtime = use_window_runtime();
    let Some(record) = runtime.record_signal(target) else {
        // Unknown target: render nothing rather than fault.
        return ().into_view();
    };

    let close = move |_| runtime.dispatch_action(WindowAction::Close { window_id: target });
    let minimize = move |_| runtime.dispatch_action(WindowAction::Minimize { window_id: target });
    let toggle_maximize =
        move |_| runtime.dispatch_action(WindowAction::Maximize { window_id: target });

    view! {
        <div class="window-controls">
            <button
                class="close"
                aria-label="Close window"
                on:pointerdown=|ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                on:click=close
            />
            <button
                class="minimize"
                aria-label="Minimize window"
                on:pointerdown=|ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                on:click=minimize
            />
            <button
                class=move || if record.get().is_maximized { "restore" } else { "maximize" }
                aria-label=move || {
                    if record.get().is_maximized {
                        "Restore window"
                    } else {
                        "Maximize window"
                    }
                }
                on:pointerdown=|ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                on:click=toggle_maximize
            />
        </div>
    }
    .into_view()
}
