//! Generator Controller.
//!
//! Owns the `GeneratorState` and is the only place it is mutated. Each
//! transition runs synchronously to completion. Precondition failures are
//! reported as `Outcome::Refused`; only unexpected generator failures surface
//! as `ControllerError`.

use tracing::{debug, error, info, warn};

use crate::services::clipboard::ClipboardSink;
use crate::services::password_generator::{CharsetPasswordGenerator, PasswordGenerator};
use crate::services::strength_meter::{RuleBasedScorer, StrengthScorer};
use crate::types::errors::ControllerError;
use crate::types::generator::{
    CharacterClass, DisplayedPassword, GeneratorState, Outcome, PasswordLength, RefusalReason,
    StrengthRating, Transition,
};
use crate::types::options::PasswordGenOptions;
use crate::types::settings::GeneratorSettings;
use crate::ui::view::GeneratorView;

/// Trait defining the generator controller interface.
pub trait GeneratorControllerTrait {
    fn apply(&mut self, transition: Transition) -> Result<Outcome, ControllerError>;
    fn toggle(&mut self, class: CharacterClass);
    fn set_length(&mut self, length: PasswordLength);
    fn request_generation(&mut self) -> Result<Outcome, ControllerError>;
    fn request_copy(&mut self) -> Outcome;
    fn check_strength(&self, password: &str) -> StrengthRating;
    fn state(&self) -> &GeneratorState;
    fn view(&self) -> GeneratorView;
}

/// Controller wiring UI transitions to the generator, scorer and clipboard.
pub struct GeneratorController {
    state: GeneratorState,
    settings: GeneratorSettings,
    generator: Box<dyn PasswordGenerator + Send>,
    scorer: Box<dyn StrengthScorer + Send>,
    clipboard: Box<dyn ClipboardSink + Send>,
}

impl GeneratorController {
    /// Creates a controller with the default generator and scorer.
    pub fn new(settings: GeneratorSettings, clipboard: Box<dyn ClipboardSink + Send>) -> Self {
        Self::with_services(
            settings,
            Box::new(CharsetPasswordGenerator::new()),
            Box::new(RuleBasedScorer::new()),
            clipboard,
        )
    }

    pub fn with_services(
        settings: GeneratorSettings,
        generator: Box<dyn PasswordGenerator + Send>,
        scorer: Box<dyn StrengthScorer + Send>,
        clipboard: Box<dyn ClipboardSink + Send>,
    ) -> Self {
        Self {
            state: GeneratorState::default(),
            settings,
            generator,
            scorer,
            clipboard,
        }
    }

    /// Replaces the generator tuning; takes effect on the next generation.
    pub fn set_generator_settings(&mut self, settings: GeneratorSettings) {
        self.settings = settings;
    }

    pub fn generator_settings(&self) -> &GeneratorSettings {
        &self.settings
    }
}

impl GeneratorControllerTrait for GeneratorController {
    fn apply(&mut self, transition: Transition) -> Result<Outcome, ControllerError> {
        match transition {
            Transition::Toggle(class) => {
                self.toggle(class);
                Ok(Outcome::Applied)
            }
            Transition::SetLength(length) => {
                self.set_length(length);
                Ok(Outcome::Applied)
            }
            Transition::Generate => self.request_generation(),
            Transition::Copy => Ok(self.request_copy()),
        }
    }

    fn toggle(&mut self, class: CharacterClass) {
        let flag = self.state.flag_mut(class);
        *flag = !*flag;
        debug!(%class, enabled = *flag, "character class toggled");
    }

    fn set_length(&mut self, length: PasswordLength) {
        self.state.length = length;
        debug!(length = length.get(), "length set");
    }

    fn request_generation(&mut self) -> Result<Outcome, ControllerError> {
        if !self.state.can_generate() {
            debug!("generation refused: no letter class enabled");
            return Ok(Outcome::Refused(RefusalReason::NoLetterClass));
        }

        let options = PasswordGenOptions::from_state(&self.state, &self.settings);
        let password = self.generator.generate(&options).map_err(|e| {
            error!(error = %e, "password generation failed");
            ControllerError::from(e)
        })?;
        let strength = self.scorer.score(&password);

        self.state.generated_password = DisplayedPassword::Generated(password);
        self.state.strength = Some(strength);
        info!(length = options.length, strength = strength.value(), "password generated");

        Ok(Outcome::Applied)
    }

    fn request_copy(&mut self) -> Outcome {
        if !self.state.can_copy() {
            debug!("copy ignored: placeholder on display");
            return Outcome::Refused(RefusalReason::NothingToCopy);
        }

        // Fire-and-forget: the latch is set even if the write fails.
        if let Err(e) = self.clipboard.write_text(self.state.generated_password.text()) {
            warn!(error = %e, "clipboard write failed");
        }
        self.state.is_copied = true;
        info!("password copied to clipboard");

        Outcome::Applied
    }

    /// Rates an arbitrary password with the same scorer used on generation.
    fn check_strength(&self, password: &str) -> StrengthRating {
        self.scorer.score(password)
    }

    fn state(&self) -> &GeneratorState {
        &self.state
    }

    fn view(&self) -> GeneratorView {
        GeneratorView::from_state(&self.state)
    }
}
