// passgen shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod generator;
pub mod options;
pub mod settings;
