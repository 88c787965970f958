//! Hall of Zero Limits Core Library
//!
//! Scene and scroll orchestration for a single-page, two-scene experience.
//!
//! ## Overview
//!
//! The page opens on a full-screen intro. The Enter button plays the intro
//! panel's exit cue. When the exit finishes, the stage switches to a
//! horizontally scrolling gallery: vertical scroll is pinned and mapped onto
//! the panel row's horizontal offset, the lead panel is cued in, and the
//! trailing panel reveals itself when its scroll window is entered.
//!
//! ## Core Principles
//!
//! - **Nothing throws**: unmounted references, degenerate geometry and
//!   repeated transitions are no-op outcomes, never errors
//! - **Two-owner scroll lock**: scene and overlay each own a flag; the
//!   document shows their OR
//! - **Schedule, don't interpolate**: tweens and scroll bindings go through
//!   [`AnimationAdapter`]; the curve math lives on the rendering side
//!
//! ## Quick Start
//!
//! ```
//! use hallofzero_core::{
//!     AdapterEvent, CommandQueue, GalleryLayout, PanelGeometry, SceneState, Stage, StageConfig,
//! };
//!
//! let mut stage = Stage::new(StageConfig::default(), GalleryLayout::default(), CommandQueue::new());
//! stage.initialize();
//! stage.advance();
//! stage.handle_event(AdapterEvent::Measured {
//!     container: "#gallery-pin".into(),
//!     geometry: PanelGeometry::new(vec![1000.0, 1000.0, 1000.0], 1000.0),
//! });
//!
//! assert_eq!(stage.scene(), SceneState::Gallery);
//! assert_eq!(stage.translator().plan().map(|p| p.travel), Some(2000.0));
//! ```

pub mod adapter;
pub mod config;
pub mod content;
pub mod error;
pub mod handle;
pub mod overlay;
pub mod pin;
pub mod queue;
pub mod reveal;
pub mod scene;
pub mod scroll_lock;
pub mod stage;

// Re-exports
pub use adapter::{
    AdapterEvent, AnimationAdapter, Easing, Property, Props, ScrollTriggerSpec, Target, TriggerId,
    TriggerWindow, TweenId, TweenSpec, Viewport,
};
pub use config::{HallTiming, IntroTiming, RevealTiming, StageConfig};
pub use content::{CoreValue, Employee, CORE_VALUES, EMPLOYEES};
pub use error::{StageError, StageResult};
pub use handle::{AnimationHandle, Choreography, Cue, Fired, HandleSlot, PanelMount};
pub use overlay::{ClickOrigin, OverlayState};
pub use pin::{Activation, PanelGeometry, PinPlan, ScrollPinTranslator};
pub use queue::{CommandQueue, StageCommand};
pub use reveal::ScrollReveal;
pub use scene::{SceneController, SceneState, Transition};
pub use scroll_lock::{LockOwner, ScrollLock};
pub use stage::{GalleryLayout, Stage};
