// Config: $XDG_CONFIG_HOME/passgen, falling back to ~/.config/passgen

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("passgen"),
        _ => home_dir().join(".config").join("passgen"),
    }
}
