//! Animation Primitive Adapter and Viewport collaborator contracts.
//!
//! The core decides *what* gets animated and *when*. Interpolation, easing
//! curves and scroll-position bookkeeping belong to whatever implements
//! these traits: the webview runtime on desktop, a [`CommandQueue`] in tests.
//!
//! [`CommandQueue`]: crate::queue::CommandQueue

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pin::PanelGeometry;

/// An element (or set of elements) addressed by CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    /// Create a target from a CSS selector
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// The CSS selector this target resolves through
    pub fn selector(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual properties the stage animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Opacity,
    Scale,
    /// Horizontal translation in pixels
    X,
    /// Vertical translation in pixels
    Y,
}

/// A set of property values, one per property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<Property, f64>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: Property, value: f64) -> Self {
        self.0.insert(property, value);
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(Property::Opacity, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(Property::Scale, value)
    }

    pub fn x(self, value: f64) -> Self {
        self.with(Property::X, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.with(Property::Y, value)
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        self.0.get(&property).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }
}

/// Named easing curves.
///
/// The adapter owns the curve math; the core only picks a name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Linear, used for scrubbed scroll mappings
    #[default]
    None,
    Power1Out,
    Power2Out,
    Power2InOut,
    /// Overshoot then settle; the value is the overshoot strength
    BackOut(f64),
}

impl Easing {
    /// CSS timing function approximating this curve
    pub fn css(&self) -> String {
        match self {
            Easing::None => "linear".to_string(),
            Easing::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)".to_string(),
            Easing::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)".to_string(),
            Easing::Power2InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)".to_string(),
            Easing::BackOut(overshoot) => {
                // Second control point rises with the overshoot strength.
                let lift = 1.0 + 0.2 * overshoot.max(0.0);
                format!("cubic-bezier(0.34, {lift:.3}, 0.64, 1)")
            }
        }
    }
}

/// A time-bounded property interpolation.
///
/// Durations, delays and stagger are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenSpec {
    pub target: Target,
    /// Starting values; `None` tweens from the current values
    pub from: Option<Props>,
    pub to: Props,
    pub duration: f64,
    pub delay: f64,
    /// Extra delay per matched element, in document order
    pub stagger: f64,
    pub easing: Easing,
}

impl TweenSpec {
    /// Tween `target` from its current values to `to`
    pub fn to(target: impl Into<Target>, to: Props, duration: f64) -> Self {
        Self {
            target: target.into(),
            from: None,
            to,
            duration,
            delay: 0.0,
            stagger: 0.0,
            easing: Easing::None,
        }
    }

    /// Tween `target` from `from` to `to`
    pub fn from_to(target: impl Into<Target>, from: Props, to: Props, duration: f64) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, to, duration)
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Nominal end time of the first matched element
    pub fn nominal_end(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Identifies a scheduled tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TweenId(pub u64);

/// Identifies a scroll-trigger binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(pub u64);

impl std::fmt::Display for TweenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tween#{}", self.0)
    }
}

impl std::fmt::Display for TriggerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "trigger#{}", self.0)
    }
}

/// The scroll range over which a trigger is armed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TriggerWindow {
    /// Vertical range starting when the target's top meets the viewport top
    /// and lasting `length` pixels of scroll.
    Pinned { length: f64 },
    /// Horizontal window on the target's left edge. `start` and `end` are
    /// fractions of the viewport width (0.8 = 80% from the left).
    Entering { start: f64, end: f64 },
}

/// A binding from a scroll window to progress/enter callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerSpec {
    pub target: Target,
    pub window: TriggerWindow,
    /// Smoothing time in seconds; `None` reports raw progress
    pub scrub: Option<f64>,
    /// Fix the target's screen position while the window is traversed
    pub pin: bool,
    /// Report entry only once, then stay silent
    pub once: bool,
}

/// Callbacks the adapter reports back into the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AdapterEvent {
    /// Every element of the tween has reached its end values
    TweenFinished { id: TweenId },
    /// Scroll progress through a trigger window, in `[0, 1]`
    TriggerProgress { id: TriggerId, progress: f64 },
    /// The trigger window was entered
    TriggerEnter { id: TriggerId },
    /// Fresh geometry for a container (mount or resize)
    Measured {
        container: Target,
        geometry: PanelGeometry,
    },
}

/// Tween and scroll-trigger capability consumed by the core.
pub trait AnimationAdapter {
    /// Write property values immediately, without interpolation
    fn set(&mut self, target: &Target, props: &Props);

    /// Schedule a tween; returns immediately
    fn tween(&mut self, spec: TweenSpec) -> TweenId;

    /// Bind a scroll window to progress/enter callbacks
    fn bind_scroll_trigger(&mut self, spec: ScrollTriggerSpec) -> TriggerId;

    /// Replace the window of a live binding, keeping its id and pin
    fn update_trigger(&mut self, id: TriggerId, window: TriggerWindow);

    fn release_trigger(&mut self, id: TriggerId);

    /// Release every live binding, pins included
    fn release_all_triggers(&mut self);
}

/// Geometry queries and document-level scroll control.
pub trait Viewport {
    /// Measure the panels inside `container`; `None` when it is not mounted
    fn measure(&self, container: &Target) -> Option<PanelGeometry>;

    /// Apply the effective document scroll lock
    fn apply_scroll_lock(&mut self, locked: bool);

    /// Scroll the document back to the top
    fn reset_scroll(&mut self);

    /// Record geometry reported by the rendering side
    fn update_geometry(&mut self, _container: &Target, _geometry: PanelGeometry) {}
}
