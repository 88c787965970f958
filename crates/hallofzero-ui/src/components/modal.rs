//! Modal shell
//!
//! Backdrop plus content box. Every click is reported with its origin;
//! clicks inside the content stop propagating so the backdrop never sees
//! them.

use dioxus::prelude::*;
use hallofzero_core::ClickOrigin;

use super::CloseButton;

/// Modal overlay that reports clicks by origin.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ModalShell {
///         on_click: move |origin| { stage.apply(|s| s.overlay_click(origin)); },
///         h2 { "{employee.name}" }
///     }
/// }
/// ```
#[component]
pub fn ModalShell(
    /// Receives the origin of every click inside the overlay
    on_click: EventHandler<ClickOrigin>,
    /// Content rendered inside the box, after the close button
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_click.call(ClickOrigin::Backdrop),

            div {
                class: "modal-content",
                onclick: move |e| {
                    e.stop_propagation();
                    on_click.call(ClickOrigin::Content);
                },

                CloseButton { onclick: move |_| on_click.call(ClickOrigin::CloseButton) }

                {children}
            }
        }
    }
}
