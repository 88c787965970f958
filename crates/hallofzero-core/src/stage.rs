//! Stage: the composition root.
//!
//! Owns the scene controller, the two-owner scroll lock, the pin translator,
//! registered panel handles, scroll reveals and the overlay. Every UI event
//! and adapter callback enters through one method here and runs to
//! completion before the next one.

use std::collections::BTreeMap;

use crate::adapter::{AdapterEvent, AnimationAdapter, Target, TweenId, Viewport};
use crate::config::StageConfig;
use crate::content::Employee;
use crate::handle::{AnimationHandle, Cue, Fired, HandleSlot, PanelMount};
use crate::overlay::{ClickOrigin, OverlayState};
use crate::pin::{Activation, ScrollPinTranslator};
use crate::reveal::ScrollReveal;
use crate::scene::{SceneController, SceneState, Transition};
use crate::scroll_lock::{LockOwner, ScrollLock};

/// Selectors for the pinned gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryLayout {
    /// Pinned and measured
    pub container: Target,
    /// Translated horizontally
    pub track: Target,
}

impl Default for GalleryLayout {
    fn default() -> Self {
        Self {
            container: Target::new("#gallery-pin"),
            track: Target::new("#gallery-track"),
        }
    }
}

pub struct Stage<H> {
    config: StageConfig,
    host: H,
    scene: SceneController,
    lock: ScrollLock,
    translator: ScrollPinTranslator,
    handles: BTreeMap<HandleSlot, AnimationHandle>,
    reveals: Vec<ScrollReveal>,
    overlay: OverlayState<&'static Employee>,
    /// Lead panel entry requested but not yet fired
    entry_pending: bool,
}

impl<H> Stage<H>
where
    H: AnimationAdapter + Viewport,
{
    pub fn new(config: StageConfig, layout: GalleryLayout, host: H) -> Self {
        let translator =
            ScrollPinTranslator::new(layout.container, layout.track, config.pin_margin, config.scrub);
        Self {
            config,
            host,
            scene: SceneController::new(),
            lock: ScrollLock::new(),
            translator,
            handles: BTreeMap::new(),
            reveals: Vec::new(),
            overlay: OverlayState::new(),
            entry_pending: false,
        }
    }

    /// Intro scene, document locked, scrolled to the top.
    pub fn initialize(&mut self) {
        self.scene.initialize();
        self.lock.set(LockOwner::Scene, true);
        self.host.apply_scroll_lock(self.lock.effective());
        self.host.reset_scroll();
        tracing::info!("stage initialized in intro");
    }

    fn sync_lock(&mut self, owner: LockOwner, locked: bool) {
        if let Some(effective) = self.lock.set(owner, locked) {
            tracing::debug!(?owner, effective, "scroll lock changed");
            self.host.apply_scroll_lock(effective);
        }
    }

    // ------------------------------------------------------------------
    // Handles
    // ------------------------------------------------------------------

    /// Take a panel's handle. A lead panel arriving after the gallery was
    /// entered gets its pending entry cue right away.
    pub fn register_handle(&mut self, slot: HandleSlot, handle: AnimationHandle) -> Option<Fired> {
        tracing::debug!(?slot, panel = handle.panel(), "handle registered");
        self.handles.insert(slot, handle);
        match slot {
            HandleSlot::Lead => self.fire_pending_entry(),
            HandleSlot::Intro => None,
        }
    }

    /// Mount `panel` against this stage's host and register its handle.
    pub fn mount_panel(&mut self, slot: HandleSlot, panel: PanelMount) -> Option<Fired> {
        let handle = panel.mount(&mut self.host);
        self.register_handle(slot, handle)
    }

    pub fn unregister_handle(&mut self, slot: HandleSlot) -> Option<AnimationHandle> {
        self.handles.remove(&slot)
    }

    pub fn handle(&self, slot: HandleSlot) -> Option<&AnimationHandle> {
        self.handles.get(&slot)
    }

    pub fn register_reveal(&mut self, reveal: ScrollReveal) {
        self.reveals.push(reveal);
    }

    pub fn reveals(&self) -> &[ScrollReveal] {
        &self.reveals
    }

    fn fire_pending_entry(&mut self) -> Option<Fired> {
        if !self.entry_pending
            || self.scene.state() != SceneState::Gallery
            || !self.translator.is_engaged()
        {
            return None;
        }
        let handle = self.handles.get_mut(&HandleSlot::Lead)?;
        self.entry_pending = false;
        Some(handle.fire(Cue::AnimateIn, &mut self.host))
    }

    // ------------------------------------------------------------------
    // Scenes
    // ------------------------------------------------------------------

    /// Enter button: play the intro exit. The scene advances when the exit
    /// reports completion.
    pub fn enter(&mut self) -> Fired {
        if self.scene.state() != SceneState::Intro {
            return Fired::AlreadyFired;
        }
        let Some(handle) = self.handles.get_mut(&HandleSlot::Intro) else {
            tracing::debug!("enter requested before the intro panel mounted");
            return Fired::NotRegistered;
        };
        let fired = handle.fire(Cue::Exit, &mut self.host);
        if fired == Fired::Instant {
            self.advance();
        }
        fired
    }

    /// Fallback for hosts that never report the exit's completion.
    pub fn exit_elapsed(&mut self) -> Transition {
        let exit_started = self
            .handles
            .get(&HandleSlot::Intro)
            .is_some_and(|handle| handle.has_fired(Cue::Exit));
        if exit_started {
            self.advance()
        } else {
            Transition::Ignored
        }
    }

    /// Intro to Gallery: unlock, pin, cue the lead panel.
    pub fn advance(&mut self) -> Transition {
        let transition = self.scene.advance();
        if transition == Transition::Ignored {
            tracing::debug!("advance ignored, gallery already active");
            return transition;
        }

        tracing::info!("entering gallery");
        self.sync_lock(LockOwner::Scene, self.scene.requires_global_lock());
        self.entry_pending = true;
        self.translator.activate(&mut self.host);
        self.fire_pending_entry();
        transition
    }

    /// The gallery container mounted; retry a deferred activation.
    pub fn container_mounted(&mut self) -> Activation {
        if self.scene.state() != SceneState::Gallery {
            return Activation::Idle;
        }
        let activation = self.translator.activate(&mut self.host);
        self.fire_pending_entry();
        activation
    }

    /// Geometry changed; resize the pin window, or bind it if still pending.
    pub fn resize(&mut self) -> Activation {
        if self.scene.state() != SceneState::Gallery {
            return Activation::Idle;
        }
        let activation = if self.translator.is_engaged() {
            self.translator.remeasure(&mut self.host)
        } else {
            self.translator.activate(&mut self.host)
        };
        self.fire_pending_entry();
        activation
    }

    /// Release every binding and fall back to intro semantics.
    pub fn teardown(&mut self) {
        for mut reveal in self.reveals.drain(..) {
            reveal.release(&mut self.host);
        }
        self.host.release_all_triggers();
        self.translator.forget();
        self.handles.clear();
        self.entry_pending = false;
        self.overlay.dismiss();
        self.sync_lock(LockOwner::Overlay, false);
        self.scene.teardown();
        self.sync_lock(LockOwner::Scene, true);
        tracing::info!("stage torn down");
    }

    // ------------------------------------------------------------------
    // Adapter callbacks
    // ------------------------------------------------------------------

    pub fn handle_event(&mut self, event: AdapterEvent) {
        match event {
            AdapterEvent::TweenFinished { id } => self.tween_finished(id),
            AdapterEvent::TriggerProgress { id, progress } => {
                self.translator.on_progress(id, progress, &mut self.host);
            }
            AdapterEvent::TriggerEnter { id } => {
                for reveal in &mut self.reveals {
                    if reveal.on_enter(id, &mut self.host) {
                        break;
                    }
                }
            }
            AdapterEvent::Measured {
                container,
                geometry,
            } => {
                self.host.update_geometry(&container, geometry);
                if &container == self.translator.container() {
                    self.resize();
                }
            }
        }
    }

    fn tween_finished(&mut self, id: TweenId) {
        let completed: Vec<(HandleSlot, Cue)> = self
            .handles
            .iter_mut()
            .filter_map(|(slot, handle)| handle.complete(id).map(|cue| (*slot, cue)))
            .collect();
        for (slot, cue) in completed {
            tracing::debug!(?slot, %cue, "cue completed");
            if slot == HandleSlot::Intro && cue == Cue::Exit {
                self.advance();
            }
        }
    }

    // ------------------------------------------------------------------
    // Overlay
    // ------------------------------------------------------------------

    pub fn select(&mut self, employee: &'static Employee) {
        if let Some(previous) = self.overlay.select(employee) {
            tracing::debug!(from = previous.name, to = employee.name, "overlay switched");
        }
        self.sync_lock(LockOwner::Overlay, self.overlay.requires_lock());
    }

    /// Close the overlay. Returns whether anything was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.overlay.dismiss().is_some();
        self.sync_lock(LockOwner::Overlay, self.overlay.requires_lock());
        was_open
    }

    /// Route a click inside the overlay; returns whether it dismissed.
    pub fn overlay_click(&mut self, origin: ClickOrigin) -> bool {
        let dismissed = self.overlay.click(origin);
        if dismissed {
            self.sync_lock(LockOwner::Overlay, false);
        }
        dismissed
    }

    pub fn selected(&self) -> Option<&'static Employee> {
        self.overlay.selected().copied()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn scene(&self) -> SceneState {
        self.scene.state()
    }

    pub fn lock(&self) -> ScrollLock {
        self.lock
    }

    pub fn effective_lock(&self) -> bool {
        self.lock.effective()
    }

    pub fn translator(&self) -> &ScrollPinTranslator {
        &self.translator
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
