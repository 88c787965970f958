//! Hero - the intro panel.
//!
//! Backdrop video, stacked "THE HALL OF / ZERO LIMITS" heading, the Enter
//! button and the company signature. Registers the intro handle on mount;
//! its exit cue zooms the video out and fades the UI, and the stage
//! advances when that tween reports completion.

use std::time::Duration;

use dioxus::prelude::*;
use hallofzero_core::{
    Choreography, Cue, Easing, Fired, HandleSlot, IntroTiming, PanelMount, Props, TweenSpec,
};
use hallofzero_ui::{Button, ButtonVariant};

use crate::context::use_stage;

const VIDEO: &str = ".hero-video";
const UI: &str = ".hero-heading, .hero-signature-container, .start-button";

/// Exit sequence: zoom-and-fade the video while the UI fades quickly.
pub fn exit_choreography(timing: &IntroTiming) -> Choreography {
    Choreography::new()
        .then(
            TweenSpec::to(
                VIDEO,
                Props::new().scale(timing.video_scale).opacity(0.0),
                timing.video_duration,
            )
            .ease(Easing::Power2InOut),
        )
        .then(TweenSpec::to(UI, Props::new().opacity(0.0), timing.ui_fade).ease(Easing::Power1Out))
}

pub fn hero_panel(timing: &IntroTiming) -> PanelMount {
    PanelMount::new("hero").cue(Cue::Exit, exit_choreography(timing))
}

/// Intro hero component.
#[component]
pub fn Hero() -> Element {
    let stage = use_stage();

    use_drop(move || {
        stage.apply(|s| s.unregister_handle(HandleSlot::Intro));
    });

    let enter = move |_| {
        let fired = stage.apply(|s| s.enter());
        tracing::info!("Enter pressed: {:?}", fired);

        // Only armed when configured; the exit tween normally drives the advance
        if let (Fired::Started(_), Some(after)) = (fired, stage.config().exit_fallback) {
            spawn(async move {
                tokio::time::sleep(Duration::from_secs_f64(after)).await;
                stage.apply(|s| s.exit_elapsed());
            });
        }
    };

    rsx! {
        section {
            class: "hero",
            onmounted: move |_| {
                stage.apply(|s| {
                    let panel = hero_panel(&s.config().intro);
                    s.mount_panel(HandleSlot::Intro, panel)
                });
            },

            video {
                class: "hero-video",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
                source { src: "assets/background-main.mp4", r#type: "video/mp4" }
            }

            div { class: "hero-overlay",
                div { class: "hero-heading",
                    div { class: "line-top",
                        span { class: "small-the", "THE" }
                        h1 { class: "big-text", "HALL" }
                        span { class: "small-off", "OF" }
                    }
                    h2 { class: "big-text bottom-text", "ZERO LIMITS" }
                }

                Button {
                    variant: ButtonVariant::Enter,
                    onclick: enter,
                    "Enter"
                }

                div { class: "hero-signature-container",
                    div { class: "hero-signature",
                        img {
                            class: "signature-logo",
                            src: "assets/logo-company.png",
                            alt: "Company Logo",
                        }
                        span { class: "copyright-text", "Ⓒ Out of The Box Systems" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hallofzero_core::{CommandQueue, Property, StageCommand};

    #[test]
    fn test_exit_finishes_on_video() {
        let choreography = exit_choreography(&IntroTiming::default());
        let mut queue = CommandQueue::new();
        let finishing = choreography.play(&mut queue).unwrap();

        let video = queue.drain().into_iter().find_map(|c| match c {
            StageCommand::Tween { id, spec } if spec.target == VIDEO.into() => Some((id, spec)),
            _ => None,
        });
        let (id, spec) = video.unwrap();
        assert_eq!(id, finishing);
        assert_eq!(spec.to.get(Property::Scale), Some(2.5));
        assert_eq!(spec.to.get(Property::Opacity), Some(0.0));
        assert_eq!(spec.easing, Easing::Power2InOut);
    }

    #[test]
    fn test_ui_fade_is_short() {
        let choreography = exit_choreography(&IntroTiming::default());
        let ui = &choreography.steps()[1];
        assert_eq!(ui.duration, 0.5);
        assert_eq!(ui.easing, Easing::Power1Out);
        assert!(ui.nominal_end() < choreography.steps()[0].nominal_end());
    }

    #[test]
    fn test_hero_panel_has_no_hidden_state() {
        let mut queue = CommandQueue::new();
        let handle = hero_panel(&IntroTiming::default()).mount(&mut queue);
        assert!(queue.pending().is_empty());
        assert_eq!(handle.cues().collect::<Vec<_>>(), vec![Cue::Exit]);
    }
}
