//! Dialog modules for the TUI
//!
//! Contains the modal dialogs drawn over the main screen

pub mod alert;
pub mod help;
