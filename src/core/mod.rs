//! Core types shared by every layer.

pub mod event;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent};
