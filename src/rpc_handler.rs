//! RPC method handler for the passgen JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` parses params into typed transitions and applies them to
//! the `App` controller.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::generator_controller::GeneratorControllerTrait;
use crate::types::generator::{CharacterClass, Outcome, PasswordLength, Transition};

fn outcome_json(outcome: Outcome, app: &App) -> Value {
    let mut result = json!({
        "applied": outcome.is_applied(),
        "state": app.controller.view().to_json(),
    });
    if let Outcome::Refused(reason) = outcome {
        result["reason"] = json!(reason.as_str());
    }
    result
}

fn parse_transition(method: &str, params: &Value) -> Result<Transition, String> {
    match method {
        "generator.toggle" => {
            let class = params.get("class").and_then(|v| v.as_str()).ok_or("missing class")?;
            let class = class.parse::<CharacterClass>().map_err(|e| e.to_string())?;
            Ok(Transition::Toggle(class))
        }
        "generator.set_length" => {
            let length = params.get("length").and_then(|v| v.as_i64()).ok_or("missing length")?;
            let length = PasswordLength::new(length).map_err(|e| e.to_string())?;
            Ok(Transition::SetLength(length))
        }
        "generator.generate" => Ok(Transition::Generate),
        "generator.copy" => Ok(Transition::Copy),
        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Refused transitions succeed with `"applied": false`.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Generator ───
        "generator.state" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(a.controller.view().to_json())
        }
        "generator.toggle" | "generator.set_length" | "generator.generate" | "generator.copy" => {
            let transition = parse_transition(method, params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let outcome = a.controller.apply(transition).map_err(|e| e.to_string())?;
            Ok(outcome_json(outcome, &a))
        }

        // ─── Strength ───
        "strength.check" => {
            let password = params.get("password").and_then(|v| v.as_str()).ok_or("missing password")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let rating = a.controller.check_strength(password);
            Ok(json!({"strength": rating.value(), "label": rating.label()}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.reset_settings().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
