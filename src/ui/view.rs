use serde::Serialize;
use zeroize::Zeroizing;

use crate::types::generator::{GeneratorState, Phase};
use crate::ui::strength_indicator::{bars, BarColor, SLOT_COUNT};

/// Everything the page needs to render, derived from `GeneratorState`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorView {
    pub password: Zeroizing<String>,
    pub is_placeholder: bool,
    pub is_copied: bool,
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub generate_enabled: bool,
    pub copy_enabled: bool,
    pub phase: Phase,
    pub strength: Option<u8>,
    pub strength_label: Option<&'static str>,
    pub bars: [Option<BarColor>; SLOT_COUNT],
}

impl GeneratorView {
    pub fn from_state(state: &GeneratorState) -> Self {
        Self {
            password: Zeroizing::new(state.generated_password.text().to_string()),
            is_placeholder: state.generated_password.is_placeholder(),
            is_copied: state.is_copied,
            length: state.length.get(),
            lowercase: state.lowercase,
            uppercase: state.uppercase,
            numbers: state.numbers,
            symbols: state.symbols,
            generate_enabled: state.can_generate(),
            copy_enabled: state.can_copy(),
            phase: state.phase(),
            strength: state.strength.map(|s| s.value()),
            strength_label: state.strength.map(|s| s.label()),
            bars: bars(state.strength),
        }
    }

    /// JSON for the page; the password string is included.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
