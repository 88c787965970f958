//! Gallery scene - team panel and company panel on one horizontal row.
//!
//! The row is pinned while the page scrolls vertically; scroll progress
//! drives the track's horizontal offset.
//!
//! ```text
//! #gallery-scroll          (grows to pin height + scroll length)
//!   #gallery-pin           (sticky, one viewport tall)
//!     #gallery-track       (flex row, translated on x)
//!       HallSection
//!       ExtraSection
//!   EmployeeModal          (when an employee is selected)
//! ```

use dioxus::prelude::*;
use hallofzero_core::{Activation, GalleryLayout};

use crate::components::{EmployeeModal, ExtraSection, HallSection};
use crate::context::{use_selected, use_stage};

/// Gallery scene component.
///
/// Element ids must match [`GalleryLayout::default`].
#[component]
pub fn Gallery() -> Element {
    let stage = use_stage();
    let selected = use_selected();

    // Leaving the gallery (window close) releases every binding
    use_drop(move || stage.apply(|s| s.teardown()));

    rsx! {
        main { class: "gallery",
            div { id: "gallery-scroll", class: "gallery-scroll",
                div {
                    id: "gallery-pin",
                    class: "gallery-pin",
                    onmounted: move |_| {
                        let layout = GalleryLayout::default();
                        stage.observe(&layout.container, &layout.track);
                        if stage.apply(|s| s.container_mounted()) == Activation::NotMounted {
                            tracing::debug!("Gallery mounted, waiting for first measurement");
                        }
                    },
                    div { id: "gallery-track", class: "gallery-track",
                        HallSection {}
                        ExtraSection {}
                    }
                }
            }

            // Outside the translated track so the overlay stays fixed to the window
            if let Some(employee) = selected() {
                EmployeeModal { employee }
            }
        }
    }
}
