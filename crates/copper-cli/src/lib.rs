/*
[INPUT]:  Public API exports for copper-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod settings;

pub use commands::{Command, run_command};
pub use settings::load_config;
