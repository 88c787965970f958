//! Employee modal - detail overlay for the selected team member.
//!
//! Clicks are routed through the stage by origin: the backdrop and the
//! close button dismiss, clicks on the content do not.

use dioxus::prelude::*;
use hallofzero_core::Employee;
use hallofzero_ui::ModalShell;

use crate::context::use_stage;

/// Overlay showing one employee's bio.
#[component]
pub fn EmployeeModal(employee: &'static Employee) -> Element {
    let stage = use_stage();

    rsx! {
        ModalShell {
            on_click: move |origin| {
                if stage.apply(|s| s.overlay_click(origin)) {
                    tracing::debug!("Overlay dismissed via {:?}", origin);
                }
            },

            div { class: "modal-header",
                img {
                    class: "modal-image",
                    src: employee.image_path,
                    alt: employee.name,
                }
                h2 { "{employee.name}" }
                p { class: "modal-title", "{employee.title}" }
            }
            div { class: "modal-body",
                h3 { "Bio:" }
                p { "{employee.bio}" }
            }
        }
    }
}
