//! passgen UI layer.
//!
//! The page is HTML/CSS/JS rendered inside a `wry` WebView (feature `gui`).
//! Rust owns all state: the page posts `IpcMessage`s and re-renders from a
//! serialized `GeneratorView`. The view derivation and strength bars are
//! pure and available without the `gui` feature.

pub mod ipc;
pub mod strength_indicator;
pub mod view;

#[cfg(feature = "gui")]
pub mod webview_app;
