//! Generator state and the closed set of transitions that mutate it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::errors::InputError;

/// Text shown before the first password is generated.
pub const PLACEHOLDER_PASSWORD: &str = "P4$5W0rD!";

/// Shortest password the UI offers.
pub const MIN_LENGTH: u8 = 8;

/// Longest password the UI offers.
pub const MAX_LENGTH: u8 = 20;

/// A password length in `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PasswordLength(u8);

impl PasswordLength {
    pub fn new(value: i64) -> Result<Self, InputError> {
        if value < MIN_LENGTH as i64 || value > MAX_LENGTH as i64 {
            return Err(InputError::LengthOutOfRange {
                value,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self(MIN_LENGTH)
    }
}

impl TryFrom<i64> for PasswordLength {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PasswordLength> for u8 {
    fn from(length: PasswordLength) -> Self {
        length.0
    }
}

/// One of the independently selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowercase" => Ok(CharacterClass::Lowercase),
            "uppercase" => Ok(CharacterClass::Uppercase),
            "numbers" => Ok(CharacterClass::Numbers),
            "symbols" => Ok(CharacterClass::Symbols),
            other => Err(InputError::UnknownCharacterClass(other.to_string())),
        }
    }
}

/// Strength rating from weakest (0) to strongest (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum StrengthRating {
    TooWeak = 0,
    Weak = 1,
    Medium = 2,
    Strong = 3,
}

impl StrengthRating {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(StrengthRating::TooWeak),
            1 => Some(StrengthRating::Weak),
            2 => Some(StrengthRating::Medium),
            3 => Some(StrengthRating::Strong),
            _ => None,
        }
    }

    /// Label shown next to the strength bars.
    pub fn label(self) -> &'static str {
        match self {
            StrengthRating::TooWeak => "TOO WEAK!",
            StrengthRating::Weak => "WEAK",
            StrengthRating::Medium => "MEDIUM",
            StrengthRating::Strong => "STRONG",
        }
    }
}

impl From<StrengthRating> for u8 {
    fn from(rating: StrengthRating) -> Self {
        rating.value()
    }
}

/// The password text currently on display.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum DisplayedPassword {
    #[default]
    Placeholder,
    Generated(Zeroizing<String>),
}

impl DisplayedPassword {
    pub fn text(&self) -> &str {
        match self {
            DisplayedPassword::Placeholder => PLACEHOLDER_PASSWORD,
            DisplayedPassword::Generated(password) => password.as_str(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DisplayedPassword::Placeholder)
    }
}

// Never print generated secrets through Debug.
impl fmt::Debug for DisplayedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayedPassword::Placeholder => f.write_str("Placeholder"),
            DisplayedPassword::Generated(password) => {
                write!(f, "Generated(<{} chars>)", password.chars().count())
            }
        }
    }
}

/// Complete UI state of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorState {
    pub length: PasswordLength,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub generated_password: DisplayedPassword,
    pub is_copied: bool,
    pub strength: Option<StrengthRating>,
}

impl GeneratorState {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub(crate) fn flag_mut(&mut self, class: CharacterClass) -> &mut bool {
        match class {
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        }
    }

    /// Generation is gated on the letter classes only.
    pub fn can_generate(&self) -> bool {
        self.lowercase || self.uppercase
    }

    pub fn can_copy(&self) -> bool {
        !self.generated_password.is_placeholder()
    }

    pub fn phase(&self) -> Phase {
        if self.generated_password.is_placeholder() {
            Phase::Idle
        } else if self.is_copied {
            Phase::Copied
        } else {
            Phase::Generated
        }
    }
}

/// Coarse lifecycle of a generator session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Generated,
    Copied,
}

/// Every way the generator state can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Toggle(CharacterClass),
    SetLength(PasswordLength),
    Generate,
    Copy,
}

/// Why a transition was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefusalReason {
    /// Neither lowercase nor uppercase is enabled.
    NoLetterClass,
    /// Only the placeholder is on display.
    NothingToCopy,
}

impl RefusalReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RefusalReason::NoLetterClass => "no_letter_class",
            RefusalReason::NothingToCopy => "nothing_to_copy",
        }
    }
}

/// Result of applying a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Refused(RefusalReason),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
