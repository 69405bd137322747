//! UI layer.
//!
//! Widgets emit paint commands and hit-test nodes; only the backend adapter
//! names `ratatui` types.

pub mod core;

pub mod backend;

pub mod widgets;
