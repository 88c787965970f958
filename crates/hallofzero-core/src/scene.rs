//! Scene Controller
//!
//! Single source of truth for which scene is showing.

use serde::{Deserialize, Serialize};

/// Top-level visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneState {
    /// Full-screen intro with the Enter button
    #[default]
    Intro,
    /// Pinned horizontal gallery of panels
    Gallery,
}

/// Outcome of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced,
    /// Not valid from the current scene; nothing changed
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct SceneController {
    state: SceneState,
}

impl SceneController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn initialize(&mut self) {
        self.state = SceneState::Intro;
    }

    /// Intro to Gallery. One way: repeated calls are ignored.
    pub fn advance(&mut self) -> Transition {
        match self.state {
            SceneState::Intro => {
                self.state = SceneState::Gallery;
                Transition::Advanced
            }
            SceneState::Gallery => Transition::Ignored,
        }
    }

    /// Back to the state a fresh mount starts from.
    pub fn teardown(&mut self) {
        self.state = SceneState::Intro;
    }

    /// Whether the current scene wants the document locked
    pub fn requires_global_lock(&self) -> bool {
        self.state == SceneState::Intro
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_intro_with_lock() {
        let scene = SceneController::new();
        assert_eq!(scene.state(), SceneState::Intro);
        assert!(scene.requires_global_lock());
    }

    #[test]
    fn test_advance_is_one_way() {
        let mut scene = SceneController::new();
        assert_eq!(scene.advance(), Transition::Advanced);
        assert_eq!(scene.advance(), Transition::Ignored);
        assert_eq!(scene.state(), SceneState::Gallery);
        assert!(!scene.requires_global_lock());
    }

    #[test]
    fn test_teardown_restores_intro() {
        let mut scene = SceneController::new();
        scene.advance();
        scene.teardown();
        assert_eq!(scene.state(), SceneState::Intro);
    }
}
