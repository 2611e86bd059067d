use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Generator tuning that the UI itself does not expose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneratorSettings {
    /// Drop look-alike characters such as `l`, `1` and `O`, `0`.
    pub exclude_similar_characters: bool,
    /// Characters that must never appear in a generated password.
    pub exclude: String,
    /// Require at least one character from every enabled class.
    pub strict: bool,
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 540.0,
            height: 760.0,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used unless `RUST_LOG` is set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
