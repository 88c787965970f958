//! Intro scene - full-screen hero with the "Enter" call to action.
//!
//! Scrolling stays locked for as long as this scene is mounted.

use dioxus::prelude::*;

use crate::components::Hero;

/// Intro scene component.
#[component]
pub fn Intro() -> Element {
    rsx! {
        main { class: "intro",
            Hero {}
        }
    }
}
