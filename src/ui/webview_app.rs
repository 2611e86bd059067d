//! WebView-based generator window using `wry` + `tao`.
//!
//! Architecture:
//! - The page is served from the `passgen://` custom protocol.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, parsed into `IpcMessage`.
//! - Rust → JS by evaluating `window.__pg_render(<view json>)` after every message.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, error, info};
use wry::WebViewBuilder;
use zeroize::Zeroizing;

use crate::app::App;
use crate::managers::generator_controller::GeneratorControllerTrait;
use crate::ui::ipc::IpcMessage;
use crate::ui::view::GeneratorView;

const PAGE_URL: &str = "passgen://localhost/";

const PAGE_HTML: &str = include_str!("../../resources/ui/generator.html");
const PAGE_CSS: &str = include_str!("../../resources/ui/generator.css");
const PAGE_JS: &str = include_str!("../../resources/ui/generator.js");

#[derive(Debug)]
enum UserEvent {
    EvalScript(Zeroizing<String>),
}

struct UiState {
    app: App,
}

fn page_html() -> String {
    let mut html = String::with_capacity(PAGE_HTML.len() + PAGE_CSS.len() + PAGE_JS.len() + 256);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">");
    html.push_str("<title>Password Generator</title><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");
    html.push_str(PAGE_HTML);
    html.push_str("<script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}

/// The script embeds the password, so both buffers are wiped on drop.
fn render_script(view: &GeneratorView) -> Zeroizing<String> {
    let json = Zeroizing::new(serde_json::to_string(view).unwrap_or_else(|_| "null".to_string()));
    Zeroizing::new(format!("window.__pg_render&&window.__pg_render({});", json.as_str()))
}

// ─── IPC handler ───

fn handle_ipc(state: &mut UiState, message: &str) -> Option<UserEvent> {
    let msg = match IpcMessage::parse(message) {
        Ok(msg) => msg,
        Err(e) => {
            debug!(error = %e, "ignoring malformed ipc message");
            return None;
        }
    };

    if let Some(transition) = msg.transition() {
        if let Err(e) = state.app.controller.apply(transition) {
            error!(error = %e, "transition failed");
        }
    }

    Some(UserEvent::EvalScript(render_script(&state.app.controller.view())))
}

// ─── Main entry point ───

/// Opens the generator window and runs the event loop until it is closed.
pub fn run(app: App) -> Result<(), Box<dyn std::error::Error>> {
    let window_settings = app.settings().window.clone();
    let state = Arc::new(Mutex::new(UiState { app }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Password Generator")
        .with_inner_size(tao::dpi::LogicalSize::new(window_settings.width, window_settings.height))
        .build(&event_loop)?;

    let ipc_state = state.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("passgen".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page_html().into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::<u8>::new().into()))
        })
        .with_url(PAGE_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let event = match ipc_state.lock() {
                Ok(mut s) => handle_ipc(&mut s, msg.body()),
                Err(e) => {
                    error!(error = %e, "ui state lock poisoned");
                    None
                }
            };
            if let Some(event) = event {
                let _ = proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    info!("generator window opened");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("generator window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    error!(error = %e, "failed to render view");
                }
            }

            _ => {}
        }
    });
}
