// passgen state managers
// Managers own mutable UI state and apply transitions to it.

pub mod generator_controller;
