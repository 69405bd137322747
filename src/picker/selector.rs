use super::button::{ButtonId, EmojiButton};
use super::form::{FieldId, Form};

/// Single-selection controller over a fixed set of emoji buttons.
///
/// Invariants after every [`EmojiSelector::activate`]:
/// - exactly one button is selected, the one most recently activated;
/// - the bound form field holds that button's emoji.
///
/// Before the first activation no button is selected and the field is left
/// untouched.
#[derive(Debug, Clone)]
pub struct EmojiSelector {
    buttons: Vec<EmojiButton>,
    field_id: FieldId,
}

impl EmojiSelector {
    pub fn new<I, S>(emojis: I, field_id: FieldId) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            buttons: emojis
                .into_iter()
                .map(|e| EmojiButton::new(e.as_ref()))
                .collect(),
            field_id,
        }
    }

    pub fn buttons(&self) -> &[EmojiButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    pub fn selected(&self) -> Option<ButtonId> {
        self.buttons
            .iter()
            .position(EmojiButton::is_selected)
            .map(ButtonId)
    }

    pub fn selected_emoji(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.is_selected())
            .map(EmojiButton::emoji)
    }

    /// Handles a click on `button`: deselects every button, selects `button`
    /// and writes its emoji into the bound field of `form`.
    ///
    /// Failures are absorbed and logged, never returned:
    /// - an id outside this selector changes nothing;
    /// - a missing form field skips the write but still moves the marker;
    /// - an empty emoji value clears the field.
    ///
    /// Returns whether any button or the field changed.
    pub fn activate(&mut self, button: ButtonId, form: &mut Form) -> bool {
        let Some(emoji) = self.buttons.get(button.0).map(|b| b.emoji().to_owned()) else {
            tracing::warn!(
                index = button.0,
                buttons = self.buttons.len(),
                "ignoring activation of unknown emoji button"
            );
            return false;
        };

        tracing::info!(emoji = %emoji, index = button.0, "emoji button activated");
        if emoji.is_empty() {
            tracing::warn!(index = button.0, "emoji button has no value");
        }

        let mut changed = false;
        for (idx, b) in self.buttons.iter_mut().enumerate() {
            changed |= b.set_selected(idx == button.0);
        }

        match form.set_value(&self.field_id, &emoji) {
            Ok(field_changed) => changed |= field_changed,
            Err(err) => tracing::warn!(error = %err, "selected emoji was not recorded"),
        }

        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/picker/selector.rs"]
mod tests;
