//! Terminal front end (crossterm + ratatui).
//!
//! Kept apart from `picker` and `app` so the view model has no terminal
//! dependency.

pub mod crossterm;
pub mod terminal_guard;
