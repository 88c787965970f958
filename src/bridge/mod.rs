//! Webview animation bridge.
//!
//! The stage records its adapter calls in a [`CommandQueue`]; this module
//! ships them to the JavaScript runtime running inside the webview and
//! turns the runtime's callbacks back into [`AdapterEvent`]s.
//!
//! ## Wire format
//!
//! Rust → JS (one message per flush):
//!
//! ```json
//! { "kind": "commands", "commands": [ { "op": "tween", "id": 3, "spec": {...}, "easing": "linear" } ] }
//! { "kind": "observe", "container": "#gallery-pin", "track": "#gallery-track" }
//! ```
//!
//! JS → Rust: the tagged [`AdapterEvent`] JSON (`{"type": "tweenFinished", "id": 3}`).

mod runtime;

pub use runtime::RUNTIME_JS;

use hallofzero_core::{
    AdapterEvent, Props, Property, StageCommand, StageError, StageResult, Target,
};
use serde::Serialize;

use crate::context::StageHandle;

/// A queued command plus the CSS timing function for tweens.
///
/// Easing curves are named by the core; the runtime only understands CSS.
#[derive(Debug, Serialize)]
pub struct WireCommand<'a> {
    #[serde(flatten)]
    command: &'a StageCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    easing: Option<String>,
}

impl<'a> WireCommand<'a> {
    pub fn new(command: &'a StageCommand) -> Self {
        let easing = match command {
            StageCommand::Tween { spec, .. } => Some(spec.easing.css()),
            _ => None,
        };
        Self { command, easing }
    }
}

/// Messages sent to the webview runtime.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Outbound<'a> {
    Commands { commands: Vec<WireCommand<'a>> },
    /// Report geometry for `container` now and on every resize
    Observe {
        container: &'a Target,
        track: &'a Target,
    },
}

impl<'a> Outbound<'a> {
    pub fn commands(commands: &'a [StageCommand]) -> Self {
        Outbound::Commands {
            commands: commands.iter().map(WireCommand::new).collect(),
        }
    }

    pub fn to_value(&self) -> StageResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Inline `style` for the first paint, in the runtime's property encoding.
///
/// Panels render with their hidden state already applied; the runtime's
/// later `set` of the same values takes ownership without a visible jump.
pub fn inline_style(props: &Props) -> String {
    let mut style = String::new();
    let mut transformed = false;
    for (property, value) in props.iter() {
        match property {
            Property::Opacity => style.push_str(&format!("opacity: {value};")),
            Property::Scale => style.push_str(&format!("--hoz-scale: {value};")),
            Property::X => style.push_str(&format!("--hoz-x: {value}px;")),
            Property::Y => style.push_str(&format!("--hoz-y: {value}px;")),
        }
        transformed |= property != Property::Opacity;
    }
    if transformed {
        style.push_str(&format!("transform: {TRANSFORM};"));
    }
    style
}

/// Transform the runtime composes from `--hoz-*` properties.
const TRANSFORM: &str =
    "translate(var(--hoz-x, 0px), var(--hoz-y, 0px)) scale(var(--hoz-scale, 1))";

/// Decode one callback from the runtime.
pub fn decode_event(value: serde_json::Value) -> StageResult<AdapterEvent> {
    serde_json::from_value(value).map_err(|e| StageError::Bridge(e.to_string()))
}

/// Feed runtime callbacks into the stage until the webview goes away.
pub async fn pump(handle: StageHandle) {
    let mut eval = handle.eval();
    loop {
        match eval.recv::<serde_json::Value>().await {
            Ok(value) => match decode_event(value) {
                Ok(event) => {
                    tracing::trace!(?event, "adapter event");
                    handle.apply(|stage| stage.handle_event(event));
                }
                Err(e) => tracing::warn!("Dropping runtime message: {}", e),
            },
            Err(e) => {
                tracing::debug!("Runtime channel closed: {:?}", e);
                break;
            }
        }
    }
}
