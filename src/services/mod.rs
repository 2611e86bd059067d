// passgen services
// Services provide the collaborators behind the generator: randomness, generation, scoring, clipboard, settings.

pub mod clipboard;
pub mod password_generator;
pub mod random_source;
pub mod settings_engine;
pub mod strength_meter;
