//! Application layer: state store, theme wiring and the picker screen.

pub mod screen;
pub mod store;
pub mod theme;

pub use screen::{InputOutcome, PickerScreen};
pub use store::{Action, DispatchResult, Effect, PickerState, Store};
