//! End-to-end stage scenarios
//!
//! Drives a [`Stage`] through the same sequence of events the desktop shell
//! produces and checks what gets scheduled.

use hallofzero_core::{
    AdapterEvent, Choreography, ClickOrigin, CommandQueue, Cue, Easing, Fired, GalleryLayout,
    HandleSlot, PanelGeometry, PanelMount, Props, SceneState, ScrollReveal, Stage, StageCommand,
    StageConfig, Transition, TriggerWindow, TweenId, TweenSpec, EMPLOYEES,
};

// ============================================================================
// Fixtures
// ============================================================================

fn stage() -> Stage<CommandQueue> {
    let _ = tracing_subscriber::fmt::try_init();
    let mut stage = Stage::new(
        StageConfig::default(),
        GalleryLayout::default(),
        CommandQueue::new(),
    );
    stage.initialize();
    stage
}

fn hero() -> PanelMount {
    PanelMount::new("hero").cue(
        Cue::Exit,
        Choreography::new()
            .then(
                TweenSpec::to("#hero-video", Props::new().scale(2.5).opacity(0.0), 2.0)
                    .ease(Easing::Power2InOut),
            )
            .then(
                TweenSpec::to(".hero-fade", Props::new().opacity(0.0), 0.5)
                    .ease(Easing::Power1Out),
            ),
    )
}

fn hall() -> PanelMount {
    PanelMount::new("hall")
        .hidden("#hall-content", Props::new().opacity(0.0))
        .cue(
            Cue::AnimateIn,
            Choreography::new().then(TweenSpec::from_to(
                "#hall-content",
                Props::new().opacity(0.0).y(50.0),
                Props::new().opacity(1.0).y(0.0),
                1.5,
            )),
        )
}

fn measured(widths: Vec<f64>, viewport: f64) -> AdapterEvent {
    AdapterEvent::Measured {
        container: "#gallery-pin".into(),
        geometry: PanelGeometry::new(widths, viewport),
    }
}

fn tweens(commands: &[StageCommand]) -> Vec<(TweenId, &TweenSpec)> {
    commands
        .iter()
        .filter_map(|c| match c {
            StageCommand::Tween { id, spec } => Some((*id, spec)),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Scene flow
// ============================================================================

/// Enter plays the exit; completion of the longest tween advances the scene
#[test]
fn test_enter_advances_on_exit_completion() {
    let mut stage = stage();
    stage.mount_panel(HandleSlot::Intro, hero());
    stage.host_mut().drain();

    let Fired::Started(finishing) = stage.enter() else {
        panic!("exit cue should start");
    };
    assert_eq!(stage.scene(), SceneState::Intro);

    let scheduled = stage.host_mut().drain();
    let video = tweens(&scheduled)
        .into_iter()
        .find(|(_, spec)| spec.target == "#hero-video".into())
        .map(|(id, _)| id);
    assert_eq!(video, Some(finishing));

    // The shorter fade finishing first does not advance
    stage.handle_event(AdapterEvent::TweenFinished {
        id: TweenId(finishing.0 + 1),
    });
    assert_eq!(stage.scene(), SceneState::Intro);

    stage.handle_event(AdapterEvent::TweenFinished { id: finishing });
    assert_eq!(stage.scene(), SceneState::Gallery);
    assert!(!stage.effective_lock());
}

/// Double-clicking Enter does not replay the exit
#[test]
fn test_double_enter_is_ignored() {
    let mut stage = stage();
    stage.mount_panel(HandleSlot::Intro, hero());
    stage.enter();
    assert_eq!(stage.enter(), Fired::AlreadyFired);
}

/// Enter before the intro panel mounted does nothing
#[test]
fn test_enter_without_intro_handle() {
    let mut stage = stage();
    assert_eq!(stage.enter(), Fired::NotRegistered);
    assert_eq!(stage.scene(), SceneState::Intro);
}

/// Fallback timer advances only once the exit has been fired
#[test]
fn test_exit_fallback() {
    let mut stage = stage();
    stage.mount_panel(HandleSlot::Intro, hero());
    assert_eq!(stage.exit_elapsed(), Transition::Ignored);

    stage.enter();
    assert_eq!(stage.exit_elapsed(), Transition::Advanced);
    assert_eq!(stage.exit_elapsed(), Transition::Ignored);
}

/// Repeated advance calls stay in the gallery
#[test]
fn test_advance_repeated() {
    let mut stage = stage();
    assert_eq!(stage.advance(), Transition::Advanced);
    for _ in 0..5 {
        assert_eq!(stage.advance(), Transition::Ignored);
        assert_eq!(stage.scene(), SceneState::Gallery);
    }
}

// ============================================================================
// Horizontal pin
// ============================================================================

/// Viewport 1000, three panels of 1000: halfway through scrolls by -1000
#[test]
fn test_three_panel_scrub_halfway() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(measured(vec![1000.0, 1000.0, 1000.0], 1000.0));

    let plan = *stage.translator().plan().unwrap();
    assert_eq!(plan.travel, 2000.0);
    assert_eq!(plan.scroll_length, 2050.0);

    let id = stage.translator().trigger().unwrap();
    let bind = stage
        .host()
        .pending()
        .iter()
        .find_map(|c| match c {
            StageCommand::BindTrigger { id: bound, spec } if *bound == id => Some(spec.clone()),
            _ => None,
        })
        .unwrap();
    assert!(bind.pin);
    assert_eq!(bind.scrub, Some(0.5));
    assert_eq!(bind.window, TriggerWindow::Pinned { length: 2050.0 });

    stage.handle_event(AdapterEvent::TriggerProgress { id, progress: 0.0 });
    assert_eq!(stage.translator().offset(), 0.0);
    stage.handle_event(AdapterEvent::TriggerProgress { id, progress: 0.5 });
    assert_eq!(stage.translator().offset(), -1000.0);
    stage.handle_event(AdapterEvent::TriggerProgress { id, progress: 1.0 });
    assert_eq!(stage.translator().offset(), -2000.0);
}

/// Lead panel animates in after the pin engages, exactly once
#[test]
fn test_lead_panel_entry_once() {
    let mut stage = stage();
    stage.mount_panel(HandleSlot::Lead, hall());
    stage.advance();
    stage.handle_event(measured(vec![1000.0, 1000.0], 1000.0));
    assert!(stage.handle(HandleSlot::Lead).unwrap().has_fired(Cue::AnimateIn));

    stage.host_mut().drain();
    stage.handle_event(measured(vec![900.0, 900.0], 900.0));
    assert!(tweens(stage.host().pending()).is_empty());
}

/// Resize keeps the binding and only changes its window
#[test]
fn test_resize_updates_pin_in_place() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(measured(vec![1000.0, 1000.0], 1000.0));
    let id = stage.translator().trigger().unwrap();

    stage.handle_event(measured(vec![1200.0, 1200.0], 1200.0));
    assert_eq!(stage.translator().trigger(), Some(id));
    assert!(stage.host().is_live(id));
    assert_eq!(stage.host().live_triggers().count(), 1);
    assert!(stage.host().pending().iter().any(|c| matches!(
        c,
        StageCommand::UpdateTrigger { id: updated, window: TriggerWindow::Pinned { length } }
            if *updated == id && *length == 1250.0
    )));
}

/// Repeated identical measurements leave the pin and scroll position alone
#[test]
fn test_identical_measurements_keep_scroll_position() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(measured(vec![1280.0, 1280.0], 1280.0));
    let id = stage.translator().trigger().unwrap();
    stage.handle_event(AdapterEvent::TriggerProgress { id, progress: 0.5 });
    stage.host_mut().drain();

    stage.handle_event(measured(vec![1280.0, 1280.0], 1280.0));
    assert_eq!(stage.translator().trigger(), Some(id));
    assert_eq!(stage.translator().offset(), -640.0);
    assert!(stage.host().pending().is_empty());
}

// ============================================================================
// Trailing reveal
// ============================================================================

#[test]
fn test_trailing_reveal_self_triggers() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(measured(vec![1000.0, 1000.0], 1000.0));

    let reveal = ScrollReveal::mount(
        "extra",
        "#extra-content > *".into(),
        Props::new().opacity(0.0).y(50.0),
        (0.8, 0.5),
        Choreography::new().then(
            TweenSpec::to("#extra-content > *", Props::new().opacity(1.0).y(0.0), 0.5)
                .stagger(0.15),
        ),
        stage.host_mut(),
    );
    let id = reveal.trigger().unwrap();
    stage.register_reveal(reveal);

    stage.host_mut().drain();
    stage.handle_event(AdapterEvent::TriggerEnter { id });
    stage.handle_event(AdapterEvent::TriggerEnter { id });
    assert_eq!(tweens(stage.host().pending()).len(), 1);
    assert!(stage.reveals()[0].has_fired());
}

// ============================================================================
// Overlay
// ============================================================================

/// select A then select B: B stays open and the lock holds
#[test]
fn test_select_replaces_selection() {
    let mut stage = stage();
    stage.advance();
    stage.select(&EMPLOYEES[0]);
    stage.select(&EMPLOYEES[2]);
    assert_eq!(stage.selected().map(|e| e.name), Some("Ivan"));
    assert!(stage.effective_lock());

    stage.dismiss();
    assert!(stage.selected().is_none());
    assert!(!stage.effective_lock());
}

#[test]
fn test_overlay_click_origins() {
    let mut stage = stage();
    stage.advance();
    stage.select(&EMPLOYEES[1]);

    assert!(!stage.overlay_click(ClickOrigin::Content));
    assert!(stage.selected().is_some());

    assert!(stage.overlay_click(ClickOrigin::Backdrop));
    assert!(stage.selected().is_none());
    assert!(!stage.effective_lock());
}

/// Teardown releases the pin and the reveal bindings
#[test]
fn test_teardown_releases_all_bindings() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(measured(vec![1000.0, 1000.0], 1000.0));
    let reveal = ScrollReveal::mount(
        "extra",
        "#extra-content".into(),
        Props::new().opacity(0.0),
        (0.8, 0.5),
        Choreography::new(),
        stage.host_mut(),
    );
    stage.register_reveal(reveal);
    assert_eq!(stage.host().live_triggers().count(), 2);

    stage.teardown();
    assert_eq!(stage.host().live_triggers().count(), 0);
    assert_eq!(
        stage.host().pending().iter().filter(|c| **c == StageCommand::ReleaseAllTriggers).count(),
        1
    );
    assert!(stage.effective_lock());
}
