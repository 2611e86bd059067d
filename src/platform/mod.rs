// passgen platform paths
// Selects the per-OS configuration directory at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
use macos as os;

#[cfg(target_os = "windows")]
use windows as os;

/// Directory holding `settings.json`.
///
/// - **Linux**: `$XDG_CONFIG_HOME/passgen` or `~/.config/passgen`
/// - **macOS**: `~/Library/Application Support/Passgen`
/// - **Windows**: `%APPDATA%/Passgen`
pub fn get_config_dir() -> PathBuf {
    os::get_config_dir()
}
