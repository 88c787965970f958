//! Employee card - portrait, name and title; click opens the overlay.

use dioxus::prelude::*;
use hallofzero_core::Employee;

/// Clickable team member card.
#[component]
pub fn EmployeeCard(
    employee: &'static Employee,
    /// Hidden state for the first paint
    style: String,
    /// Called with this card's employee
    onselect: EventHandler<&'static Employee>,
) -> Element {
    rsx! {
        div {
            class: "employee-card",
            style: "{style}",
            onclick: move |_| onselect.call(employee),

            div { class: "card-image-wrapper",
                img {
                    class: "card-image",
                    src: employee.image_path,
                    alt: employee.name,
                }
                div { class: "neon-border" }
            }
            h3 { class: "card-name", "{employee.name}" }
            p { class: "card-title", "{employee.title}" }
        }
    }
}
