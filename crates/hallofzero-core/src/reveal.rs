//! Self-triggered scroll reveals.
//!
//! Panels outside the parent's direct control bind their own reveal to a
//! scroll window at mount. The window fires once; after that the binding is
//! released and further entries are ignored.

use crate::adapter::{AnimationAdapter, Props, ScrollTriggerSpec, Target, TriggerId, TriggerWindow};
use crate::handle::Choreography;

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    panel: String,
    trigger: Option<TriggerId>,
    reveal: Choreography,
    fired: bool,
}

impl ScrollReveal {
    /// Write `hidden` to `target`, then bind the window.
    ///
    /// `start` and `end` are viewport-width fractions for the target's
    /// left edge, e.g. 0.8 then 0.5.
    pub fn mount<A>(
        panel: impl Into<String>,
        target: Target,
        hidden: Props,
        (start, end): (f64, f64),
        reveal: Choreography,
        adapter: &mut A,
    ) -> Self
    where
        A: AnimationAdapter + ?Sized,
    {
        let panel = panel.into();
        adapter.set(&target, &hidden);
        let trigger = adapter.bind_scroll_trigger(ScrollTriggerSpec {
            target,
            window: TriggerWindow::Entering { start, end },
            scrub: None,
            pin: false,
            once: true,
        });
        tracing::debug!(%panel, %trigger, "scroll reveal armed");
        Self {
            panel,
            trigger: Some(trigger),
            reveal,
            fired: false,
        }
    }

    /// Handle a window entry. Returns true when this call played the reveal.
    pub fn on_enter<A>(&mut self, id: TriggerId, adapter: &mut A) -> bool
    where
        A: AnimationAdapter + ?Sized,
    {
        if self.fired || self.trigger != Some(id) {
            return false;
        }
        self.fired = true;
        self.reveal.play(adapter);
        if let Some(trigger) = self.trigger.take() {
            adapter.release_trigger(trigger);
        }
        tracing::debug!(panel = %self.panel, "scroll reveal played");
        true
    }

    /// Release the binding if it has not fired yet.
    pub fn release<A>(&mut self, adapter: &mut A)
    where
        A: AnimationAdapter + ?Sized,
    {
        if let Some(trigger) = self.trigger.take() {
            adapter.release_trigger(trigger);
        }
    }

    pub fn panel(&self) -> &str {
        &self.panel
    }

    pub fn trigger(&self) -> Option<TriggerId> {
        self.trigger
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
