//! Extra section - "OUT OF THE BOX SYSTEMS", last on the gallery row.
//!
//! Reveals itself: on mount it hides its children and arms a once-only
//! window on the horizontal row. When the section's left edge crosses 80%
//! of the viewport the children rise in with a stagger.

use dioxus::prelude::*;
use hallofzero_core::{
    Choreography, CoreValue, Easing, Props, RevealTiming, ScrollReveal, Target, TweenSpec,
    CORE_VALUES,
};

use crate::bridge::inline_style;
use crate::context::use_stage;

const CHILDREN: &str = ".extra-content > *";

pub fn hidden(timing: &RevealTiming) -> Props {
    Props::new().opacity(0.0).y(timing.rise)
}

pub fn reveal(timing: &RevealTiming) -> Choreography {
    Choreography::new().then(
        TweenSpec::from_to(
            CHILDREN,
            hidden(timing),
            Props::new().opacity(1.0).y(0.0),
            timing.duration,
        )
        .stagger(timing.stagger)
        .ease(Easing::Power1Out),
    )
}

#[component]
fn CoreValueCard(value: &'static CoreValue) -> Element {
    rsx! {
        div { class: "value-card",
            h3 { class: "value-title", "{value.title}" }
            p { class: "value-text", "{value.text}" }
        }
    }
}

/// Company panel component.
#[component]
pub fn ExtraSection() -> Element {
    let stage = use_stage();
    let child_style = inline_style(&hidden(&stage.config().reveal));

    rsx! {
        section {
            class: "extra-section-wrapper panel",
            onmounted: move |_| {
                stage.apply(|s| {
                    let timing = s.config().reveal.clone();
                    let armed = ScrollReveal::mount(
                        "extra",
                        Target::new(CHILDREN),
                        hidden(&timing),
                        (timing.window_start, timing.window_end),
                        reveal(&timing),
                        s.host_mut(),
                    );
                    s.register_reveal(armed);
                });
            },

            div { class: "extra-content",
                h1 { class: "extra-title", style: "{child_style}", "OUT OF THE BOX SYSTEMS" }
                p { class: "extra-text", style: "{child_style}",
                    "We are the architects of the new digital landscape. Our mission is to \
                     dismantle outdated limitations and engineer systems that define the \
                     future of high-performance computing and user experience."
                }
                div { class: "core-values-container", style: "{child_style}",
                    for value in CORE_VALUES.iter() {
                        CoreValueCard { key: "{value.title}", value }
                    }
                }
                div { class: "extra-footer", style: "{child_style}",
                    p { "Innovation is not a feature; it's our foundation." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hallofzero_core::{CommandQueue, StageCommand};

    #[test]
    fn test_reveal_plays_once() {
        let timing = RevealTiming::default();
        let mut queue = CommandQueue::new();
        let mut armed = ScrollReveal::mount(
            "extra",
            Target::new(CHILDREN),
            hidden(&timing),
            (timing.window_start, timing.window_end),
            reveal(&timing),
            &mut queue,
        );
        let id = armed.trigger().unwrap();
        queue.drain();

        assert!(armed.on_enter(id, &mut queue));
        assert!(matches!(
            queue.pending().first(),
            Some(StageCommand::Tween { spec, .. }) if spec.stagger == 0.15
        ));
        assert!(!armed.on_enter(id, &mut queue));
        assert!(!queue.is_live(id));
    }
}
