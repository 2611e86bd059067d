//! App Core for passgen.
//!
//! Central struct holding the settings engine and the generator controller.

use tracing::{info, warn};

use crate::logging;
use crate::managers::generator_controller::GeneratorController;
use crate::services::clipboard::ClipboardSink;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SettingsError;
use crate::types::settings::{AppSettings, LoggingSettings};

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub controller: GeneratorController,
}

impl App {
    /// Loads settings from `config_path` (or the default location) and builds
    /// a controller writing to `clipboard`.
    pub fn new(
        config_path: Option<String>,
        clipboard: Box<dyn ClipboardSink + Send>,
    ) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        Ok(Self::from_engine(settings_engine, clipboard))
    }

    /// Startup sequence for the binaries: load settings from the default
    /// location, install logging with the configured filter, build the app.
    pub fn bootstrap(clipboard: Box<dyn ClipboardSink + Send>) -> Self {
        Self::bootstrap_with(SettingsEngine::new(None), clipboard)
    }

    /// Same as `bootstrap` with an explicit engine. The load outcome is
    /// logged once the subscriber is installed; an unreadable settings file
    /// is replaced by defaults.
    pub fn bootstrap_with(mut settings_engine: SettingsEngine, clipboard: Box<dyn ClipboardSink + Send>) -> Self {
        let loaded = settings_engine.load();
        let filter = match &loaded {
            Ok(settings) => settings.logging.filter.clone(),
            Err(_) => LoggingSettings::default().filter,
        };
        logging::init(&filter);
        match loaded {
            Ok(_) => info!(path = settings_engine.get_config_path(), filter = %filter, "settings ready"),
            Err(e) => {
                warn!(error = %e, path = settings_engine.get_config_path(), "settings unreadable, using defaults")
            }
        }
        Self::from_engine(settings_engine, clipboard)
    }

    /// Builds the app around an engine whose settings are already loaded
    /// (or left at defaults).
    pub fn from_engine(settings_engine: SettingsEngine, clipboard: Box<dyn ClipboardSink + Send>) -> Self {
        let generator_settings = settings_engine.get_settings().generator.clone();
        Self {
            settings_engine,
            controller: GeneratorController::new(generator_settings, clipboard),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        self.settings_engine.get_settings()
    }

    /// Updates one setting and pushes generator changes into the controller.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        self.sync_controller();
        Ok(())
    }

    pub fn reset_settings(&mut self) -> Result<(), SettingsError> {
        self.settings_engine.reset()?;
        self.sync_controller();
        Ok(())
    }

    fn sync_controller(&mut self) {
        let generator_settings = self.settings_engine.get_settings().generator.clone();
        self.controller.set_generator_settings(generator_settings);
    }
}
