//! Hall section - "OUR TEAM" panel, first on the gallery row.
//!
//! Mounts hidden and registers itself as the lead handle. Its animate-in
//! cue is fired by the stage once the pin is bound, so the content rises
//! into view exactly once per gallery visit.

use dioxus::prelude::*;
use hallofzero_core::{
    Choreography, Cue, Easing, HallTiming, HandleSlot, PanelMount, Props, TweenSpec, EMPLOYEES,
};

use super::EmployeeCard;
use crate::bridge::inline_style;
use crate::context::use_stage;

const CONTENT: &str = ".hall-content";
const CARDS: &str = ".employee-card";

/// Content rises and fades in; cards pop in one after another.
pub fn animate_in(timing: &HallTiming) -> Choreography {
    Choreography::new()
        .then(
            TweenSpec::from_to(
                CONTENT,
                Props::new().opacity(0.0).y(timing.content_rise),
                Props::new().opacity(1.0).y(0.0),
                timing.content_duration,
            )
            .ease(Easing::Power2Out),
        )
        .then(
            TweenSpec::from_to(
                CARDS,
                Props::new().opacity(0.0).scale(timing.card_scale),
                Props::new().opacity(1.0).scale(1.0),
                timing.card_duration,
            )
            .delay(timing.card_delay)
            .stagger(timing.card_stagger)
            .ease(Easing::BackOut(timing.card_overshoot)),
        )
}

fn content_hidden() -> Props {
    Props::new().opacity(0.0)
}

fn card_hidden(timing: &HallTiming) -> Props {
    Props::new().opacity(0.0).scale(timing.card_scale)
}

pub fn hall_panel(timing: &HallTiming) -> PanelMount {
    PanelMount::new("hall")
        .hidden(CONTENT, content_hidden())
        .hidden(CARDS, card_hidden(timing))
        .cue(Cue::AnimateIn, animate_in(timing))
}

/// Team panel component.
#[component]
pub fn HallSection() -> Element {
    let stage = use_stage();
    let timing = stage.config().hall;
    let content_style = inline_style(&content_hidden());
    let card_style = inline_style(&card_hidden(&timing));

    rsx! {
        section {
            class: "hall-section panel",
            onmounted: move |_| {
                stage.apply(|s| {
                    let panel = hall_panel(&s.config().hall);
                    s.mount_panel(HandleSlot::Lead, panel)
                });
            },

            div { class: "hall-content", style: "{content_style}",
                h1 { class: "hall-title", "OUR TEAM" }
                p { class: "hall-subtitle", "ENGINEERING THE FUTURE" }

                div { class: "employee-cards-container",
                    for employee in EMPLOYEES.iter() {
                        EmployeeCard {
                            key: "{employee.name}",
                            employee,
                            style: card_style.clone(),
                            onselect: move |employee| stage.apply(|s| s.select(employee)),
                        }
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
    fn test_hidden_state_written_on_mount() {
        let mut queue = CommandQueue::new();
        let handle = hall_panel(&HallTiming::default()).mount(&mut queue);
        let targets: Vec<_> = queue
            .pending()
            .iter()
            .map(|c| match c {
                StageCommand::Set { target, .. } => target.selector().to_string(),
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(targets, vec![CONTENT, CARDS]);
        assert!(!handle.has_fired(Cue::AnimateIn));
    }

    #[test]
    fn test_first_paint_matches_mount() {
        let timing = HallTiming::default();
        let mut queue = CommandQueue::new();
        hall_panel(&timing).mount(&mut queue);
        let written: Vec<_> = queue
            .pending()
            .iter()
            .filter_map(|c| match c {
                StageCommand::Set { props, .. } => Some(inline_style(props)),
                _ => None,
            })
            .collect();
        assert_eq!(
            written,
            vec![
                inline_style(&content_hidden()),
                inline_style(&card_hidden(&timing)),
            ]
        );
        assert!(written[1].contains("--hoz-scale: 0.8;"));
    }

    #[test]
    fn test_cards_finish_last() {
        let timing = HallTiming::default();
        let choreography = animate_in(&timing);
        let cards = &choreography.steps()[1];
        assert_eq!(cards.delay, 1.0);
        assert_eq!(cards.stagger, 0.2);
        assert_eq!(cards.from.as_ref().and_then(|p| p.get(Property::Scale)), Some(0.8));
        assert_eq!(cards.easing, Easing::BackOut(1.2));
        assert!(cards.nominal_end() > choreography.steps()[0].nominal_end());
    }
}
