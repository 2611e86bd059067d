//! passgen RPC Server — JSON-RPC over stdin/stdout for scripting and integration.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"generator.toggle", "params":{"class":"uppercase"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use passgen::app::App;
use passgen::rpc_handler::handle_method;
use passgen::services::clipboard;

use serde_json::{json, Value};
use tracing::{debug, info};

/// Maximum accepted requests per second.
const MAX_REQUESTS_PER_SECOND: u32 = 200;

/// Fixed-window rate limiter.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn send(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> io::Result<()> {
    let app = Mutex::new(App::bootstrap(clipboard::default_sink()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    send(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;
    info!("rpc server ready");

    let mut rate_limiter = RateLimiter::new(MAX_REQUESTS_PER_SECOND);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                send(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            send(&mut out, &json!({"id": id, "error": "rate limit exceeded"}))?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        debug!(method, "rpc request");

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        send(&mut out, &response)?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
