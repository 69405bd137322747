//! The emoji picker view model.
//!
//! [`EmojiSelector`] owns an explicit list of [`EmojiButton`]s and keeps at
//! most one of them selected; every activation is mirrored into a hidden field
//! of the enclosing [`Form`].

pub mod button;
pub mod form;
pub mod selector;

pub use button::{ButtonId, EmojiButton};
pub use form::{FieldId, Form, FormError, FormSubmission, HiddenField};
pub use selector::EmojiSelector;

/// Element id of the hidden field that receives the chosen emoji.
pub const SELECTED_EMOJI_FIELD_ID: &str = "selected-emoji";
/// Name the hidden field is submitted under.
pub const SELECTED_EMOJI_FIELD_NAME: &str = "emoji";

/// Palette offered when the settings file does not name one.
pub const DEFAULT_EMOJIS: &[&str] = &[
    "✨", "🌟", "💫", "🙏", "❤️", "🌈", "🌞", "🌺", "🎉", "💝", "🌱", "⭐",
];
