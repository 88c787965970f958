//! Scroll-Pin Translator
//!
//! Turns one vertical scroll gesture into horizontal travel of a panel row.
//! The container is pinned while the row moves, for a virtual scroll length
//! of `travel + margin` pixels.

use serde::{Deserialize, Serialize};

use crate::adapter::{
    AnimationAdapter, Easing, Props, ScrollTriggerSpec, Target, TriggerId, TriggerWindow,
    TweenSpec, Viewport,
};

/// Measured widths of the panels in a row plus the viewport width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelGeometry {
    pub panel_widths: Vec<f64>,
    pub viewport_width: f64,
}

/// Widths that cannot be laid out contribute nothing.
fn usable(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

impl PanelGeometry {
    pub fn new(panel_widths: Vec<f64>, viewport_width: f64) -> Self {
        Self {
            panel_widths,
            viewport_width,
        }
    }

    /// Sum of all panel widths
    pub fn total_width(&self) -> f64 {
        self.panel_widths.iter().copied().map(usable).sum()
    }

    /// Horizontal travel distance, never negative
    pub fn travel(&self) -> f64 {
        (self.total_width() - usable(self.viewport_width)).max(0.0)
    }
}

/// The binding parameters derived from one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinPlan {
    pub total_width: f64,
    pub travel: f64,
    /// Vertical scroll distance over which progress sweeps 0 to 1
    pub scroll_length: f64,
    pub scrub: f64,
}

impl PinPlan {
    pub fn new(geometry: &PanelGeometry, margin: f64, scrub: f64) -> Self {
        let travel = geometry.travel();
        Self {
            total_width: geometry.total_width(),
            travel,
            scroll_length: travel + margin.max(0.0),
            scrub: scrub.max(0.0),
        }
    }

    /// Nothing to traverse: the row already fits in the viewport
    pub fn is_degenerate(&self) -> bool {
        self.travel <= 0.0
    }

    /// Horizontal offset for scroll progress `p`, clamped to `[0, 1]`
    pub fn offset_at(&self, progress: f64) -> f64 {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if self.is_degenerate() {
            0.0
        } else {
            -self.travel * p
        }
    }
}

/// Result of trying to bind the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Pin bound through the adapter
    Bound(TriggerId),
    /// Row fits the viewport: no movement, no pin
    Degenerate,
    /// Container not mounted yet; retried on mount
    NotMounted,
    /// Never requested, or already released
    Idle,
}

/// Maps vertical scroll progress onto the row's horizontal offset.
#[derive(Debug, Clone)]
pub struct ScrollPinTranslator {
    container: Target,
    track: Target,
    margin: f64,
    scrub: f64,
    requested: bool,
    /// Measurement the current plan was built from
    geometry: Option<PanelGeometry>,
    plan: Option<PinPlan>,
    trigger: Option<TriggerId>,
    progress: f64,
}

impl ScrollPinTranslator {
    /// `container` is pinned and measured; `track` is the row that moves
    pub fn new(container: Target, track: Target, margin: f64, scrub: f64) -> Self {
        Self {
            container,
            track,
            margin,
            scrub,
            requested: false,
            geometry: None,
            plan: None,
            trigger: None,
            progress: 0.0,
        }
    }

    /// Measure and bind. Safe to call again: a live binding is kept,
    /// an unmounted container leaves the request armed for a retry.
    pub fn activate<H>(&mut self, host: &mut H) -> Activation
    where
        H: AnimationAdapter + Viewport + ?Sized,
    {
        self.requested = true;
        if let Some(id) = self.trigger {
            return Activation::Bound(id);
        }
        if self.plan.is_some() {
            return Activation::Degenerate;
        }

        let Some(geometry) = host.measure(&self.container) else {
            tracing::debug!(container = %self.container, "pin container not mounted, deferring");
            return Activation::NotMounted;
        };
        self.bind(&geometry, host)
    }

    fn bind<H>(&mut self, geometry: &PanelGeometry, host: &mut H) -> Activation
    where
        H: AnimationAdapter + Viewport + ?Sized,
    {
        let plan = PinPlan::new(geometry, self.margin, self.scrub);
        self.plan = Some(plan);
        self.geometry = Some(geometry.clone());

        if plan.is_degenerate() {
            tracing::debug!(
                total_width = plan.total_width,
                viewport = geometry.viewport_width,
                "panels fit the viewport, pin released immediately"
            );
            return Activation::Degenerate;
        }

        let id = host.bind_scroll_trigger(ScrollTriggerSpec {
            target: self.container.clone(),
            window: TriggerWindow::Pinned {
                length: plan.scroll_length,
            },
            scrub: Some(plan.scrub),
            pin: true,
            once: false,
        });
        self.trigger = Some(id);
        tracing::info!(
            trigger = %id,
            travel = plan.travel,
            scroll_length = plan.scroll_length,
            "horizontal pin bound"
        );
        Activation::Bound(id)
    }

    /// Apply progress reported for `id`. Returns the new offset, or `None`
    /// when the event belongs to another binding.
    pub fn on_progress<A>(&mut self, id: TriggerId, progress: f64, adapter: &mut A) -> Option<f64>
    where
        A: AnimationAdapter + ?Sized,
    {
        if self.trigger != Some(id) {
            return None;
        }
        let plan = self.plan?;
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let offset = plan.offset_at(self.progress);
        self.write_offset(offset, plan.scrub, adapter);
        Some(offset)
    }

    fn write_offset<A>(&self, offset: f64, scrub: f64, adapter: &mut A)
    where
        A: AnimationAdapter + ?Sized,
    {
        let to = Props::new().x(offset);
        if scrub > 0.0 {
            adapter.tween(TweenSpec::to(self.track.clone(), to, scrub).ease(Easing::None));
        } else {
            adapter.set(&self.track, &to);
        }
    }

    /// Follow a geometry change, keeping the current progress.
    ///
    /// Identical geometry is a no-op. A live binding has its window resized
    /// in place rather than released, so the document never collapses under
    /// the reader's scroll position.
    pub fn remeasure<H>(&mut self, host: &mut H) -> Activation
    where
        H: AnimationAdapter + Viewport + ?Sized,
    {
        if !self.requested {
            return Activation::Idle;
        }
        let Some(geometry) = host.measure(&self.container) else {
            if let Some(id) = self.trigger.take() {
                host.release_trigger(id);
            }
            self.plan = None;
            self.geometry = None;
            return Activation::NotMounted;
        };
        if self.geometry.as_ref() == Some(&geometry) {
            return self.current();
        }

        let plan = PinPlan::new(&geometry, self.margin, self.scrub);
        let activation = match self.trigger {
            Some(id) if !plan.is_degenerate() => {
                host.update_trigger(
                    id,
                    TriggerWindow::Pinned {
                        length: plan.scroll_length,
                    },
                );
                self.plan = Some(plan);
                self.geometry = Some(geometry);
                tracing::debug!(
                    trigger = %id,
                    travel = plan.travel,
                    scroll_length = plan.scroll_length,
                    "horizontal pin resized"
                );
                Activation::Bound(id)
            }
            Some(id) => {
                host.release_trigger(id);
                self.trigger = None;
                self.bind(&geometry, host)
            }
            None => self.bind(&geometry, host),
        };
        host.set(&self.track, &Props::new().x(self.offset()));
        activation
    }

    fn current(&self) -> Activation {
        match (self.trigger, self.plan) {
            (Some(id), _) => Activation::Bound(id),
            (None, Some(_)) => Activation::Degenerate,
            (None, None) if self.requested => Activation::NotMounted,
            (None, None) => Activation::Idle,
        }
    }

    /// Release the binding and forget the request.
    pub fn release<A>(&mut self, adapter: &mut A)
    where
        A: AnimationAdapter + ?Sized,
    {
        if let Some(id) = self.trigger.take() {
            adapter.release_trigger(id);
        }
        self.forget();
    }

    /// Drop local state without talking to the adapter (it was already
    /// told to release everything).
    pub fn forget(&mut self) {
        self.trigger = None;
        self.geometry = None;
        self.plan = None;
        self.requested = false;
        self.progress = 0.0;
    }

    /// Measured and bound, or settled as degenerate
    pub fn is_engaged(&self) -> bool {
        self.plan.is_some()
    }

    /// Activation was requested but has not happened yet
    pub fn is_waiting(&self) -> bool {
        self.requested && self.plan.is_none()
    }

    pub fn plan(&self) -> Option<&PinPlan> {
        self.plan.as_ref()
    }

    pub fn trigger(&self) -> Option<TriggerId> {
        self.trigger
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current horizontal offset of the track
    pub fn offset(&self) -> f64 {
        self.plan.map_or(0.0, |plan| plan.offset_at(self.progress))
    }

    pub fn container(&self) -> &Target {
        &self.container
    }
}
