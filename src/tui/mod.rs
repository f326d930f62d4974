//! Terminal User Interface module
//!
//! A single-screen form built with ratatui: an entry form for new
//! transactions, the transaction table, and modal alerts for the results of
//! add, delete and export.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
