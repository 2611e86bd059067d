use thiserror::Error;

// === GenerationError ===

/// Errors raised by a password generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// No character class was enabled.
    #[error("At least one character class must be enabled")]
    NoCharacterClasses,
    /// Exclusions removed every character from an enabled pool.
    #[error("Character pool is empty after exclusions: {0}")]
    EmptyPool(String),
    /// The requested length cannot be produced.
    #[error("Invalid password length: {0}")]
    InvalidLength(usize),
    /// Strict mode needs one slot per enabled pool.
    #[error("Strict mode needs at least {required} characters, got {length}")]
    StrictTooShort { required: usize, length: usize },
    /// The system random number generator failed.
    #[error("Random generation failed: {0}")]
    RandomGeneration(String),
}

// === ClipboardError ===

/// Errors related to writing the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard could not be opened.
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),
    /// Writing text to the clipboard failed.
    #[error("Failed to copy to clipboard: {0}")]
    WriteFailed(String),
}

// === SettingsError ===

/// Errors related to settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File I/O operation failed.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// JSON serialization or deserialization failed.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key does not exist.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided value is not valid for the key.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ControllerError ===

/// Unexpected failures while applying a generator transition.
///
/// Refused transitions are not errors; see `Outcome::Refused`.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Password generation failed: {0}")]
    Generation(#[from] GenerationError),
}

// === InputError ===

/// Errors raised when converting untyped UI or RPC input into transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Length outside of the accepted range.
    #[error("length out of range: {value} (expected {min}..={max})")]
    LengthOutOfRange { value: i64, min: u8, max: u8 },
    /// Unknown character class name.
    #[error("unknown character class: {0}")]
    UnknownCharacterClass(String),
}
