//! Cross-component animation handles.
//!
//! A panel describes its hidden starting state and the choreography behind
//! each named cue, then mounts. Mounting writes the hidden state through the
//! adapter and only then yields the [`AnimationHandle`], so whoever holds a
//! handle can fire it without the panel flashing its content first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::adapter::{AnimationAdapter, Props, Target, TweenId, TweenSpec};

/// Named zero-argument operations a panel can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cue {
    AnimateIn,
    Exit,
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cue::AnimateIn => f.write_str("animate-in"),
            Cue::Exit => f.write_str("exit"),
        }
    }
}

/// Where a parent keeps the handles it orchestrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandleSlot {
    /// The intro panel (exit cue)
    Intro,
    /// The first gallery panel (animate-in cue)
    Lead,
}

/// Ordered tween steps played for one cue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choreography {
    steps: Vec<TweenSpec>,
}

impl Choreography {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: TweenSpec) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[TweenSpec] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the step that ends last; later steps win ties.
    fn finishing_step(&self) -> Option<usize> {
        self.steps
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, step)| match best {
                Some((_, end)) if end > step.nominal_end() => best,
                _ => Some((i, step.nominal_end())),
            })
            .map(|(i, _)| i)
    }

    /// Schedule every step; returns the id of the finishing step.
    pub fn play<A>(&self, adapter: &mut A) -> Option<TweenId>
    where
        A: AnimationAdapter + ?Sized,
    {
        let finishing = self.finishing_step();
        let mut finished_by = None;
        for (i, step) in self.steps.iter().enumerate() {
            let id = adapter.tween(step.clone());
            if Some(i) == finishing {
                finished_by = Some(id);
            }
        }
        finished_by
    }
}

/// Outcome of firing a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    /// Scheduled; completion is signalled by this tween
    Started(TweenId),
    /// Nothing to animate; the cue completed on the spot
    Instant,
    /// Already fired once; ignored
    AlreadyFired,
    /// The panel does not expose this cue
    UnknownCue,
    /// No panel registered in the slot yet
    NotRegistered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CueState {
    Armed,
    Playing(TweenId),
    Done,
}

/// Description of a panel before it mounts.
#[derive(Debug, Clone, Default)]
pub struct PanelMount {
    panel: String,
    hidden: Vec<(Target, Props)>,
    cues: BTreeMap<Cue, Choreography>,
}

impl PanelMount {
    pub fn new(panel: impl Into<String>) -> Self {
        Self {
            panel: panel.into(),
            ..Self::default()
        }
    }

    /// Values written at mount, before any cue can fire
    pub fn hidden(mut self, target: impl Into<Target>, props: Props) -> Self {
        self.hidden.push((target.into(), props));
        self
    }

    pub fn cue(mut self, cue: Cue, choreography: Choreography) -> Self {
        self.cues.insert(cue, choreography);
        self
    }

    /// Write the hidden state, then hand out the handle.
    pub fn mount<A>(self, adapter: &mut A) -> AnimationHandle
    where
        A: AnimationAdapter + ?Sized,
    {
        for (target, props) in &self.hidden {
            adapter.set(target, props);
        }
        tracing::debug!(panel = %self.panel, cues = self.cues.len(), "panel mounted");
        AnimationHandle {
            panel: self.panel,
            cues: self
                .cues
                .into_iter()
                .map(|(cue, choreography)| (cue, (choreography, CueState::Armed)))
                .collect(),
        }
    }
}

/// Capability a mounted panel hands to its parent.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    panel: String,
    cues: BTreeMap<Cue, (Choreography, CueState)>,
}

impl AnimationHandle {
    pub fn panel(&self) -> &str {
        &self.panel
    }

    pub fn cues(&self) -> impl Iterator<Item = Cue> + '_ {
        self.cues.keys().copied()
    }

    /// Play `cue` once. Later calls are ignored.
    pub fn fire<A>(&mut self, cue: Cue, adapter: &mut A) -> Fired
    where
        A: AnimationAdapter + ?Sized,
    {
        let Some((choreography, state)) = self.cues.get_mut(&cue) else {
            return Fired::UnknownCue;
        };
        if *state != CueState::Armed {
            tracing::debug!(panel = %self.panel, %cue, "cue already fired, ignoring");
            return Fired::AlreadyFired;
        }
        match choreography.play(adapter) {
            Some(id) => {
                *state = CueState::Playing(id);
                tracing::debug!(panel = %self.panel, %cue, finishing = %id, "cue fired");
                Fired::Started(id)
            }
            None => {
                *state = CueState::Done;
                Fired::Instant
            }
        }
    }

    /// Note a finished tween. Returns the cue it completed, if any.
    pub fn complete(&mut self, id: TweenId) -> Option<Cue> {
        self.cues.iter_mut().find_map(|(cue, (_, state))| {
            if *state == CueState::Playing(id) {
                *state = CueState::Done;
                Some(*cue)
            } else {
                None
            }
        })
    }

    pub fn has_fired(&self, cue: Cue) -> bool {
        self.cues
            .get(&cue)
            .is_some_and(|(_, state)| *state != CueState::Armed)
    }

    pub fn is_playing(&self, cue: Cue) -> bool {
        self.cues
            .get(&cue)
            .is_some_and(|(_, state)| matches!(state, CueState::Playing(_)))
    }
}
