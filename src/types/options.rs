use serde::{Deserialize, Serialize};

use super::generator::GeneratorState;
use super::settings::GeneratorSettings;

/// Options for generating a random password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    #[serde(default)]
    pub exclude_similar_characters: bool,
    #[serde(default)]
    pub exclude: String,
    #[serde(default)]
    pub strict: bool,
}

impl PasswordGenOptions {
    /// Combines the UI-selected constraints with the configured generator settings.
    pub fn from_state(state: &GeneratorState, settings: &GeneratorSettings) -> Self {
        Self {
            length: state.length.get(),
            uppercase: state.uppercase,
            lowercase: state.lowercase,
            numbers: state.numbers,
            symbols: state.symbols,
            exclude_similar_characters: settings.exclude_similar_characters,
            exclude: settings.exclude.clone(),
            strict: settings.strict,
        }
    }
}

impl Default for PasswordGenOptions {
    fn default() -> Self {
        Self {
            length: 10,
            uppercase: true,
            lowercase: true,
            numbers: false,
            symbols: false,
            exclude_similar_characters: false,
            exclude: String::new(),
            strict: false,
        }
    }
}
