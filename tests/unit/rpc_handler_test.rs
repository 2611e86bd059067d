//! Unit tests for the RPC handler: every JSON-RPC method dispatched by `handle_method`.
//!
//! These run through the same code path as the `passgen-rpc` binary, with the
//! settings file in a temporary directory and an in-memory clipboard.

use std::sync::Mutex;
use serde_json::json;
use tempfile::TempDir;

use passgen::app::App;
use passgen::managers::generator_controller::GeneratorController;
use passgen::rpc_handler::handle_method;
use passgen::services::clipboard::MemoryClipboard;
use passgen::services::password_generator::CharsetPasswordGenerator;
use passgen::services::strength_meter::StrengthScorer;
use passgen::types::generator::StrengthRating;
use passgen::types::settings::GeneratorSettings;

/// Create a fresh App whose settings live in a temp directory.
fn setup() -> (Mutex<App>, MemoryClipboard, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("settings.json").to_string_lossy().to_string();
    let clipboard = MemoryClipboard::new();
    let app = App::new(Some(path), Box::new(clipboard.clone())).expect("Failed to init App");
    (Mutex::new(app), clipboard, tmp)
}

// ─── Ping ───

#[test]
fn test_ping() {
    let (app, _clip, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

// ─── Unknown method ───

#[test]
fn test_unknown_method_returns_error() {
    let (app, _clip, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Generator ───

#[test]
fn test_initial_state() {
    let (app, _clip, _tmp) = setup();
    let state = handle_method(&app, "generator.state", &json!({})).unwrap();
    assert_eq!(state["password"], "P4$5W0rD!");
    assert_eq!(state["is_placeholder"], true);
    assert_eq!(state["length"], 8);
    assert_eq!(state["phase"], "idle");
    assert_eq!(state["strength"], serde_json::Value::Null);
    assert_eq!(state["generate_enabled"], false);
    assert_eq!(state["copy_enabled"], false);
}

#[test]
fn test_toggle_flips_class() {
    let (app, _clip, _tmp) = setup();
    let res = handle_method(&app, "generator.toggle", &json!({"class": "symbols"})).unwrap();
    assert_eq!(res["applied"], true);
    assert_eq!(res["state"]["symbols"], true);
    assert_eq!(res["state"]["lowercase"], false);
}

#[test]
fn test_toggle_rejects_bad_input() {
    let (app, _clip, _tmp) = setup();
    let missing = handle_method(&app, "generator.toggle", &json!({})).unwrap_err();
    assert_eq!(missing, "missing class");
    let unknown = handle_method(&app, "generator.toggle", &json!({"class": "emoji"})).unwrap_err();
    assert_eq!(unknown, "unknown character class: emoji");
}

#[test]
fn test_set_length_validates_range() {
    let (app, _clip, _tmp) = setup();
    let res = handle_method(&app, "generator.set_length", &json!({"length": 20})).unwrap();
    assert_eq!(res["state"]["length"], 20);

    let err = handle_method(&app, "generator.set_length", &json!({"length": 7})).unwrap_err();
    assert!(err.contains("length out of range: 7"));
    let err = handle_method(&app, "generator.set_length", &json!({"length": "12"})).unwrap_err();
    assert_eq!(err, "missing length");

    // Rejected input leaves the length alone.
    let state = handle_method(&app, "generator.state", &json!({})).unwrap();
    assert_eq!(state["length"], 20);
}

#[test]
fn test_generate_refused_without_letters() {
    let (app, _clip, _tmp) = setup();
    handle_method(&app, "generator.toggle", &json!({"class": "numbers"})).unwrap();
    let res = handle_method(&app, "generator.generate", &json!({})).unwrap();
    assert_eq!(res["applied"], false);
    assert_eq!(res["reason"], "no_letter_class");
    assert_eq!(res["state"]["is_placeholder"], true);
}

#[test]
fn test_generate_and_copy() {
    let (app, clipboard, _tmp) = setup();
    handle_method(&app, "generator.toggle", &json!({"class": "lowercase"})).unwrap();
    handle_method(&app, "generator.set_length", &json!({"length": 14})).unwrap();

    let res = handle_method(&app, "generator.generate", &json!({})).unwrap();
    assert_eq!(res["applied"], true);
    assert!(res.get("reason").is_none());
    let password = res["state"]["password"].as_str().unwrap().to_string();
    assert_eq!(password.chars().count(), 14);
    assert!(res["state"]["strength"].is_u64());
    assert_eq!(res["state"]["phase"], "generated");

    let res = handle_method(&app, "generator.copy", &json!({})).unwrap();
    assert_eq!(res["applied"], true);
    assert_eq!(res["state"]["is_copied"], true);
    assert_eq!(res["state"]["phase"], "copied");
    assert_eq!(clipboard.contents(), Some(password));
}

#[test]
fn test_copy_refused_on_placeholder() {
    let (app, clipboard, _tmp) = setup();
    let res = handle_method(&app, "generator.copy", &json!({})).unwrap();
    assert_eq!(res["applied"], false);
    assert_eq!(res["reason"], "nothing_to_copy");
    assert_eq!(res["state"]["is_copied"], false);
    assert_eq!(clipboard.write_count(), 0);
}

// ─── Strength ───

#[test]
fn test_strength_check() {
    let (app, _clip, _tmp) = setup();
    let res = handle_method(&app, "strength.check", &json!({"password": "aB3$efghij"})).unwrap();
    assert_eq!(res, json!({"strength": 3, "label": "STRONG"}));

    let res = handle_method(&app, "strength.check", &json!({"password": "abc"})).unwrap();
    assert_eq!(res["label"], "TOO WEAK!");

    assert!(handle_method(&app, "strength.check", &json!({})).is_err());
}

struct AlwaysMedium;

impl StrengthScorer for AlwaysMedium {
    fn score(&self, _password: &str) -> StrengthRating {
        StrengthRating::Medium
    }
}

#[test]
fn test_strength_check_matches_generated_rating() {
    let (app, _clip, _tmp) = setup();
    app.lock().unwrap().controller = GeneratorController::with_services(
        GeneratorSettings::default(),
        Box::new(CharsetPasswordGenerator::new()),
        Box::new(AlwaysMedium),
        Box::new(MemoryClipboard::new()),
    );

    handle_method(&app, "generator.toggle", &json!({"class": "lowercase"})).unwrap();
    let res = handle_method(&app, "generator.generate", &json!({})).unwrap();
    let password = res["state"]["password"].as_str().unwrap().to_string();

    let check = handle_method(&app, "strength.check", &json!({"password": password})).unwrap();
    assert_eq!(check["strength"], res["state"]["strength"]);
    assert_eq!(check, json!({"strength": 2, "label": "MEDIUM"}));
}

// ─── Settings ───

#[test]
fn test_settings_get_returns_defaults() {
    let (app, _clip, _tmp) = setup();
    let res = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(res["generator"]["strict"], false);
    assert_eq!(res["generator"]["exclude"], "");
    assert_eq!(res["logging"]["filter"], "info");
}

#[test]
fn test_settings_set_reaches_generator() {
    let (app, _clip, _tmp) = setup();
    let res = handle_method(&app, "settings.set", &json!({
        "key": "generator.exclude",
        "value": "ABCDEFGHIJKLMNOPQRSTUVWXY"
    })).unwrap();
    assert_eq!(res, json!({"ok": true}));

    handle_method(&app, "generator.toggle", &json!({"class": "uppercase"})).unwrap();
    let res = handle_method(&app, "generator.generate", &json!({})).unwrap();
    assert_eq!(res["state"]["password"], "ZZZZZZZZ");
}

#[test]
fn test_settings_set_rejects_bad_requests() {
    let (app, _clip, _tmp) = setup();
    assert_eq!(
        handle_method(&app, "settings.set", &json!({"value": 1})).unwrap_err(),
        "missing key"
    );
    assert_eq!(
        handle_method(&app, "settings.set", &json!({"key": "generator.strict"})).unwrap_err(),
        "missing value"
    );
    let err = handle_method(&app, "settings.set", &json!({"key": "generator.nope", "value": 1})).unwrap_err();
    assert!(err.starts_with("Invalid settings key"));
    let err = handle_method(&app, "settings.set", &json!({"key": "generator.strict", "value": "yes"})).unwrap_err();
    assert!(err.starts_with("Invalid settings value"));
}

#[test]
fn test_settings_set_refuses_exclusions_that_break_generate() {
    let (app, _clip, _tmp) = setup();
    let err = handle_method(&app, "settings.set", &json!({
        "key": "generator.exclude",
        "value": "abcdefghijklmnopqrstuvwxyz"
    })).unwrap_err();
    assert!(err.starts_with("Invalid settings value"));

    handle_method(&app, "generator.toggle", &json!({"class": "lowercase"})).unwrap();
    handle_method(&app, "generator.toggle", &json!({"class": "uppercase"})).unwrap();
    let state = handle_method(&app, "generator.state", &json!({})).unwrap();
    assert_eq!(state["generate_enabled"], true);

    let res = handle_method(&app, "generator.generate", &json!({})).unwrap();
    assert_eq!(res["applied"], true);
}

#[test]
fn test_settings_reset() {
    let (app, _clip, _tmp) = setup();
    handle_method(&app, "settings.set", &json!({"key": "generator.strict", "value": true})).unwrap();
    handle_method(&app, "settings.reset", &json!({})).unwrap();
    let res = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(res["generator"]["strict"], false);
}
