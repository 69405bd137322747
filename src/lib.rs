//! emoji-picker: single-choice emoji selection mirrored into a hidden form
//! field.
//!
//! Modules:
//! - core: frontend-neutral input events
//! - picker: buttons, the selector and the form it writes to
//! - ui: paint commands, hit-testing, pointer runtime, widgets, backends
//! - app: store, theme wiring and the picker screen
//! - settings: JSON settings file
//! - tui: crossterm conversion and terminal guard (`tui` feature)

pub mod app;
pub mod core;
pub mod picker;
pub mod settings;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
