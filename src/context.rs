//! Stage context provider for the Hall of Zero Limits.
//!
//! Provides the [`Stage`] and its bridge to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| StageHandle::new(stage, eval));
//!
//! // In child components
//! let stage = use_stage();
//! stage.apply(|s| s.select(employee));
//! ```

use dioxus::document::Eval;
use dioxus::prelude::*;
use hallofzero_core::{CommandQueue, Employee, SceneState, Stage, StageConfig, Target};

use crate::bridge::Outbound;

/// The stage as driven from the desktop shell.
pub type DesktopStage = Stage<CommandQueue>;

/// Get the stage configuration.
/// Uses the global config set from command line args.
pub fn get_stage_config() -> StageConfig {
    crate::get_stage_config()
}

/// Shared access to the stage and the webview runtime.
///
/// Every mutation goes through [`StageHandle::apply`], which flushes the
/// commands the stage queued so the webview never lags behind the core.
#[derive(Clone, Copy)]
pub struct StageHandle {
    stage: Signal<DesktopStage>,
    eval: Eval,
}

impl StageHandle {
    pub fn new(stage: Signal<DesktopStage>, eval: Eval) -> Self {
        Self { stage, eval }
    }

    /// Run `f` against the stage, then send whatever it queued.
    pub fn apply<R>(&self, f: impl FnOnce(&mut DesktopStage) -> R) -> R {
        let mut stage = self.stage;
        let (out, commands) = {
            let mut guard = stage.write();
            let out = f(&mut *guard);
            (out, guard.host_mut().drain())
        };
        if !commands.is_empty() {
            tracing::trace!("Flushing {} stage commands", commands.len());
            self.send(&Outbound::commands(&commands));
        }
        out
    }

    /// Ask the runtime to report geometry for the gallery row.
    pub fn observe(&self, container: &Target, track: &Target) {
        self.send(&Outbound::Observe { container, track });
    }

    /// Active scene (reactive).
    pub fn scene(&self) -> SceneState {
        self.stage.read().scene()
    }

    /// Open overlay item (reactive).
    pub fn selected(&self) -> Option<&'static Employee> {
        self.stage.read().selected()
    }

    /// Stage configuration (not reactive; fixed at launch).
    pub fn config(&self) -> StageConfig {
        self.stage.peek().config().clone()
    }

    pub(crate) fn eval(&self) -> Eval {
        self.eval
    }

    fn send(&self, message: &Outbound<'_>) {
        match message.to_value() {
            Ok(value) => {
                if let Err(e) = self.eval.send(value) {
                    tracing::warn!("Failed to reach webview runtime: {:?}", e);
                }
            }
            Err(e) => tracing::error!("Failed to encode bridge message: {}", e),
        }
    }
}

/// Hook to access the stage from context.
pub fn use_stage() -> StageHandle {
    use_context::<StageHandle>()
}

/// Hook for the active scene.
///
/// Memoized so scroll progress (which writes the stage every frame) does
/// not re-render the scene tree.
pub fn use_scene() -> Memo<SceneState> {
    let stage = use_stage();
    use_memo(move || stage.scene())
}

/// Hook for the employee currently shown in the overlay.
pub fn use_selected() -> Memo<Option<&'static Employee>> {
    let stage = use_stage();
    use_memo(move || stage.selected())
}
