//! Windowed front end: winit for the window and input, pixels for presentation.

mod app;
pub mod commands;
pub mod errors;
mod pointer;

pub use commands::run_gui::RunGuiCommand;
pub use errors::ViewerError;
