// Countdown Widget Library
// Exports all modules for testing and reuse

pub mod services;
pub mod ui_egui;
pub mod utils;
