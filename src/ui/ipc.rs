//! Messages posted by the page through `window.ipc.postMessage`.
//!
//! Each control builds its own tagged message, so the payload is parsed
//! straight into a `Transition` without looking fields up by name.

use serde::Deserialize;

use crate::types::generator::{CharacterClass, PasswordLength, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcMessage {
    /// The page finished loading and wants the current view.
    UiReady,
    Toggle { class: CharacterClass },
    SetLength { length: PasswordLength },
    Generate,
    Copy,
}

impl IpcMessage {
    pub fn parse(message: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(message)
    }

    /// The state transition requested, if any.
    pub fn transition(self) -> Option<Transition> {
        match self {
            IpcMessage::UiReady => None,
            IpcMessage::Toggle { class } => Some(Transition::Toggle(class)),
            IpcMessage::SetLength { length } => Some(Transition::SetLength(length)),
            IpcMessage::Generate => Some(Transition::Generate),
            IpcMessage::Copy => Some(Transition::Copy),
        }
    }
}
