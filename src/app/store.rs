use crate::picker::{ButtonId, EmojiSelector, FieldId, Form, FormSubmission};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ActivateButton(ButtonId),
    Submit,
    Quit,
}

/// Work the host must do after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit(FormSubmission),
    Quit,
}

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    pub selector: EmojiSelector,
    pub form: Form,
}

impl PickerState {
    pub fn new<I, S>(emojis: I, field_id: &str, field_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let field_id = FieldId::from(field_id);
        Self {
            selector: EmojiSelector::new(emojis, field_id.clone()),
            form: Form::new().with_hidden_field(field_id, field_name),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.emojis,
            &settings.form.field_id,
            &settings.form.field_name,
        )
    }
}

pub struct Store {
    state: PickerState,
}

impl Store {
    pub fn new(state: PickerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ActivateButton(button) => {
                let state = &mut self.state;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: state.selector.activate(button, &mut state.form),
                }
            }
            Action::Submit => {
                let submission = self.state.form.submit();
                tracing::info!(
                    fields = submission.len(),
                    selected = self.state.selector.selected_emoji().unwrap_or(""),
                    "form submitted"
                );
                DispatchResult {
                    effects: vec![Effect::Submit(submission)],
                    state_changed: false,
                }
            }
            Action::Quit => DispatchResult {
                effects: vec![Effect::Quit],
                state_changed: false,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/store.rs"]
mod tests;
