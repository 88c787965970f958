//! Command-queue host.
//!
//! Records every adapter and viewport call as a [`StageCommand`]. The
//! desktop bridge drains the queue into the webview runtime after each
//! event; tests inspect it directly.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::adapter::{
    AnimationAdapter, Props, ScrollTriggerSpec, Target, TriggerId, TriggerWindow, TweenId,
    TweenSpec, Viewport,
};
use crate::pin::PanelGeometry;

/// One instruction for the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum StageCommand {
    Set { target: Target, props: Props },
    Tween { id: TweenId, spec: TweenSpec },
    BindTrigger { id: TriggerId, spec: ScrollTriggerSpec },
    UpdateTrigger { id: TriggerId, window: TriggerWindow },
    ReleaseTrigger { id: TriggerId },
    ReleaseAllTriggers,
    ScrollLock { locked: bool },
    ResetScroll,
}

/// Host that queues commands and caches reported geometry.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<StageCommand>,
    next_tween: u64,
    next_trigger: u64,
    live: BTreeSet<TriggerId>,
    geometry: HashMap<Target, PanelGeometry>,
    locked: Option<bool>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued since the last drain
    pub fn pending(&self) -> &[StageCommand] {
        &self.commands
    }

    /// Take all queued commands
    pub fn drain(&mut self) -> Vec<StageCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Record geometry for a mounted container
    pub fn set_geometry(&mut self, container: Target, geometry: PanelGeometry) {
        self.geometry.insert(container, geometry);
    }

    /// Forget a container that unmounted
    pub fn clear_geometry(&mut self, container: &Target) {
        self.geometry.remove(container);
    }

    pub fn live_triggers(&self) -> impl Iterator<Item = TriggerId> + '_ {
        self.live.iter().copied()
    }

    pub fn is_live(&self, id: TriggerId) -> bool {
        self.live.contains(&id)
    }

    /// Last scroll lock sent to the document, if any
    pub fn scroll_locked(&self) -> Option<bool> {
        self.locked
    }
}

impl AnimationAdapter for CommandQueue {
    fn set(&mut self, target: &Target, props: &Props) {
        self.commands.push(StageCommand::Set {
            target: target.clone(),
            props: props.clone(),
        });
    }

    fn tween(&mut self, spec: TweenSpec) -> TweenId {
        self.next_tween += 1;
        let id = TweenId(self.next_tween);
        self.commands.push(StageCommand::Tween { id, spec });
        id
    }

    fn bind_scroll_trigger(&mut self, spec: ScrollTriggerSpec) -> TriggerId {
        self.next_trigger += 1;
        let id = TriggerId(self.next_trigger);
        self.live.insert(id);
        self.commands.push(StageCommand::BindTrigger { id, spec });
        id
    }

    fn update_trigger(&mut self, id: TriggerId, window: TriggerWindow) {
        if self.live.contains(&id) {
            self.commands.push(StageCommand::UpdateTrigger { id, window });
        }
    }

    fn release_trigger(&mut self, id: TriggerId) {
        if self.live.remove(&id) {
            self.commands.push(StageCommand::ReleaseTrigger { id });
        }
    }

    fn release_all_triggers(&mut self) {
        self.live.clear();
        self.commands.push(StageCommand::ReleaseAllTriggers);
    }
}

impl Viewport for CommandQueue {
    fn measure(&self, container: &Target) -> Option<PanelGeometry> {
        self.geometry.get(container).cloned()
    }

    fn apply_scroll_lock(&mut self, locked: bool) {
        self.locked = Some(locked);
        self.commands.push(StageCommand::ScrollLock { locked });
    }

    fn reset_scroll(&mut self) {
        self.commands.push(StageCommand::ResetScroll);
    }

    fn update_geometry(&mut self, container: &Target, geometry: PanelGeometry) {
        self.set_geometry(container.clone(), geometry);
    }
}
