use dioxus::prelude::*;
use hallofzero_core::{CommandQueue, GalleryLayout, SceneState, Stage};

use crate::bridge::{self, RUNTIME_JS};
use crate::context::{get_stage_config, use_scene, StageHandle};
use crate::pages::{Gallery, Intro};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the stage context and the webview runtime, then
/// renders whichever scene is active.
#[component]
pub fn App() -> Element {
    let stage = use_signal(|| {
        Stage::new(
            get_stage_config(),
            GalleryLayout::default(),
            CommandQueue::new(),
        )
    });
    let eval = use_hook(|| document::eval(RUNTIME_JS));
    let handle = use_context_provider(|| StageHandle::new(stage, eval));

    // Lock scroll and rewind before the first frame of the intro
    use_effect(move || {
        handle.apply(|s| s.initialize());
        tracing::info!("Stage initialized");
    });

    // Runtime callbacks for the lifetime of the window
    use_future(move || bridge::pump(handle));

    let scene = use_scene();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: match scene() {
                SceneState::Intro => "App scene-intro",
                SceneState::Gallery => "App scene-gallery",
            },
            match scene() {
                SceneState::Intro => rsx! { Intro {} },
                SceneState::Gallery => rsx! { Gallery {} },
            }
        }
    }
}
