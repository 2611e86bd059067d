use passgen::types::errors::*;

// === GenerationError Tests ===

#[test]
fn generation_error_display_variants() {
    assert_eq!(
        GenerationError::NoCharacterClasses.to_string(),
        "At least one character class must be enabled"
    );
    assert_eq!(
        GenerationError::EmptyPool("numbers".to_string()).to_string(),
        "Character pool is empty after exclusions: numbers"
    );
    assert_eq!(GenerationError::InvalidLength(0).to_string(), "Invalid password length: 0");
    assert_eq!(
        GenerationError::StrictTooShort { required: 4, length: 2 }.to_string(),
        "Strict mode needs at least 4 characters, got 2"
    );
    assert_eq!(
        GenerationError::RandomGeneration("entropy exhausted".to_string()).to_string(),
        "Random generation failed: entropy exhausted"
    );
}

// === ClipboardError Tests ===

#[test]
fn clipboard_error_display_variants() {
    assert_eq!(
        ClipboardError::Unavailable("no display".to_string()).to_string(),
        "Failed to access clipboard: no display"
    );
    assert_eq!(
        ClipboardError::WriteFailed("denied".to_string()).to_string(),
        "Failed to copy to clipboard: denied"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(SettingsError::IoError("disk full".to_string()).to_string(), "Settings I/O error: disk full");
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(SettingsError::InvalidKey("a.b".to_string()).to_string(), "Invalid settings key: a.b");
    assert_eq!(
        SettingsError::InvalidValue("not a bool".to_string()).to_string(),
        "Invalid settings value: not a bool"
    );
}

// === ControllerError Tests ===

#[test]
fn controller_error_wraps_generation_error() {
    let err = ControllerError::from(GenerationError::NoCharacterClasses);
    assert_eq!(
        err.to_string(),
        "Password generation failed: At least one character class must be enabled"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_some());
}

// === InputError Tests ===

#[test]
fn input_error_display_variants() {
    assert_eq!(
        InputError::LengthOutOfRange { value: 42, min: 8, max: 20 }.to_string(),
        "length out of range: 42 (expected 8..=20)"
    );
    assert_eq!(
        InputError::UnknownCharacterClass("emoji".to_string()).to_string(),
        "unknown character class: emoji"
    );
}
