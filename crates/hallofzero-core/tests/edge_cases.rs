//! Edge case and boundary condition tests
//!
//! Every failure mode of the stage degrades to "nothing happens".

use hallofzero_core::{
    Activation, AdapterEvent, CommandQueue, GalleryLayout, PanelGeometry, SceneState, Stage,
    StageCommand, StageConfig, TriggerId, TweenId,
};

fn stage() -> Stage<CommandQueue> {
    let mut stage = Stage::new(
        StageConfig::default(),
        GalleryLayout::default(),
        CommandQueue::new(),
    );
    stage.initialize();
    stage
}

// ============================================================================
// Degenerate geometry
// ============================================================================

/// No panels at all
#[test]
fn test_empty_panel_row() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(AdapterEvent::Measured {
        container: "#gallery-pin".into(),
        geometry: PanelGeometry::new(vec![], 1280.0),
    });
    assert_eq!(stage.translator().plan().map(|p| p.travel), Some(0.0));
    assert!(stage.translator().trigger().is_none());
}

/// Zero-width panels measured before layout settles
#[test]
fn test_zero_width_panels() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(AdapterEvent::Measured {
        container: "#gallery-pin".into(),
        geometry: PanelGeometry::new(vec![0.0, 0.0, 0.0], 1280.0),
    });
    assert_eq!(stage.container_mounted(), Activation::Degenerate);
    assert_eq!(stage.host().live_triggers().count(), 0);
}

/// Row exactly as wide as the viewport
#[test]
fn test_row_equals_viewport() {
    let geometry = PanelGeometry::new(vec![640.0, 640.0], 1280.0);
    assert_eq!(geometry.travel(), 0.0);
}

/// A zero-width viewport still yields finite travel
#[test]
fn test_zero_viewport() {
    let geometry = PanelGeometry::new(vec![500.0, 500.0], 0.0);
    assert_eq!(geometry.travel(), 1000.0);
}

// ============================================================================
// Events out of order
// ============================================================================

/// Adapter callbacks before anything is bound are ignored
#[test]
fn test_events_before_gallery() {
    let mut stage = stage();
    stage.host_mut().drain();

    stage.handle_event(AdapterEvent::TweenFinished { id: TweenId(7) });
    stage.handle_event(AdapterEvent::TriggerProgress {
        id: TriggerId(1),
        progress: 0.5,
    });
    stage.handle_event(AdapterEvent::TriggerEnter { id: TriggerId(1) });

    assert_eq!(stage.scene(), SceneState::Intro);
    assert!(stage.host().pending().is_empty());
}

/// Geometry for the pin container during the intro is kept for later
#[test]
fn test_geometry_before_advance() {
    let mut stage = stage();
    stage.handle_event(AdapterEvent::Measured {
        container: "#gallery-pin".into(),
        geometry: PanelGeometry::new(vec![1000.0, 1000.0], 1000.0),
    });
    assert!(!stage.translator().is_engaged());

    stage.advance();
    assert!(stage.translator().trigger().is_some());
}

/// Geometry for an unrelated container does not touch the pin
#[test]
fn test_geometry_for_other_container() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(AdapterEvent::Measured {
        container: "#somewhere-else".into(),
        geometry: PanelGeometry::new(vec![1000.0, 1000.0], 1000.0),
    });
    assert!(stage.translator().is_waiting());
}

/// NaN and out-of-range progress are clamped
#[test]
fn test_progress_clamping() {
    let mut stage = stage();
    stage.advance();
    stage.handle_event(AdapterEvent::Measured {
        container: "#gallery-pin".into(),
        geometry: PanelGeometry::new(vec![1000.0, 1000.0], 1000.0),
    });
    let id = stage.translator().trigger().unwrap();

    stage.handle_event(AdapterEvent::TriggerProgress { id, progress: 4.0 });
    assert_eq!(stage.translator().offset(), -1000.0);
    stage.handle_event(AdapterEvent::TriggerProgress {
        id,
        progress: f64::NAN,
    });
    assert_eq!(stage.translator().offset(), 0.0);
}

/// Scrub of zero writes offsets directly instead of tweening
#[test]
fn test_zero_scrub_sets_offset() {
    let config = StageConfig {
        scrub: 0.0,
        ..StageConfig::default()
    };
    let mut stage = Stage::new(config, GalleryLayout::default(), CommandQueue::new());
    stage.initialize();
    stage.advance();
    stage.handle_event(AdapterEvent::Measured {
        container: "#gallery-pin".into(),
        geometry: PanelGeometry::new(vec![1000.0, 1000.0], 1000.0),
    });
    let id = stage.translator().trigger().unwrap();
    stage.host_mut().drain();

    stage.handle_event(AdapterEvent::TriggerProgress { id, progress: 0.25 });
    assert!(matches!(
        stage.host().pending(),
        [StageCommand::Set { target, .. }] if *target == "#gallery-track".into()
    ));
}

/// Dismiss with nothing open changes nothing
#[test]
fn test_dismiss_when_closed() {
    let mut stage = stage();
    stage.host_mut().drain();
    assert!(!stage.dismiss());
    assert!(stage.host().pending().is_empty());
}

/// Teardown twice is harmless
#[test]
fn test_double_teardown() {
    let mut stage = stage();
    stage.advance();
    stage.teardown();
    stage.teardown();
    assert_eq!(stage.scene(), SceneState::Intro);
    assert!(stage.effective_lock());
}
