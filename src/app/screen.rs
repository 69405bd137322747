use super::store::{Action, DispatchResult, Effect, PickerState, Store};
use super::theme::emoji_row_styles;
use crate::core::event::{InputEvent, KeyCode, KeyModifiers, MouseButton};
use crate::picker::ButtonId;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::input::UiEvent;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::{Theme, Token};
use crate::ui::core::tree::{NodeKind, UiTree};
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::emoji_row::{EmojiRow, BUTTON_HEIGHT};

const TITLE: &str = "How are you feeling?";
const HINT: &str = "click an emoji · enter submit · q quit";

#[derive(Debug, Default)]
pub struct InputOutcome {
    pub effects: Vec<Effect>,
    pub needs_redraw: bool,
}

impl InputOutcome {
    fn absorb(&mut self, result: DispatchResult) {
        self.needs_redraw |= result.state_changed;
        self.effects.extend(result.effects);
    }
}

/// The picker's single screen: draws the emoji row and routes input to the
/// store. Hit-testing uses the tree from the most recent [`Self::render`].
pub struct PickerScreen {
    theme: Theme,
    painter: Painter,
    tree: UiTree,
    runtime: UiRuntime,
}

impl PickerScreen {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            painter: Painter::new(),
            tree: UiTree::new(),
            runtime: UiRuntime::new(),
        }
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect, state: &PickerState) {
        // Resolve hover against last frame's tree before rebuilding it.
        let hovered = self.hovered_button();
        self.painter.clear();
        self.tree.clear();

        let mut ui = Ui::new(area, &mut self.painter, &mut self.tree);
        ui.inset(Insets::xy(1, 0));

        let title = ui.take_top(1);
        ui.painter.text_clipped(
            Pos::new(title.x, title.y),
            TITLE,
            Style::default()
                .fg(self.theme.color(Token::AccentFg))
                .add_mod(Mod::BOLD),
            title,
        );

        let hint = ui.take_bottom(1);
        ui.painter.text_clipped(
            Pos::new(hint.x, hint.y),
            HINT,
            Style::default().fg(self.theme.color(Token::MutedFg)),
            hint,
        );

        let body = ui.rect;
        if state.selector.is_empty() {
            ui.painter.text_clipped(
                Pos::new(body.x, body.y),
                "no emojis configured",
                Style::default().fg(self.theme.color(Token::WarningFg)),
                body,
            );
        } else {
            let row_rect = body.centered(body.w, BUTTON_HEIGHT);
            ui.with_rect(row_rect, |ui| {
                EmojiRow {
                    id_base: IdPath::root("picker").push_str("emoji_row"),
                    layer: 0,
                    buttons: state.selector.buttons(),
                    hovered,
                    styles: emoji_row_styles(&self.theme),
                }
                .ui(ui);
            });
        }

        backend.draw(area, self.painter.cmds());
    }

    pub fn handle_input(&mut self, input: &InputEvent, store: &mut Store) -> InputOutcome {
        let mut outcome = InputOutcome::default();

        match input {
            InputEvent::Key(key) if key.is_press() => {
                let action = match key.code {
                    KeyCode::Enter => Some(Action::Submit),
                    KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Action::Quit)
                    }
                    _ => None,
                };
                if let Some(action) = action {
                    outcome.absorb(store.dispatch(action));
                }
            }
            InputEvent::Mouse(_) => {
                let out = self.runtime.on_input(input, &self.tree);
                outcome.needs_redraw |= out.needs_redraw;
                for event in out.events {
                    let UiEvent::Click {
                        id,
                        button: MouseButton::Left,
                        ..
                    } = event
                    else {
                        continue;
                    };
                    if let Some(NodeKind::EmojiButton { index }) = self.tree.node(id).map(|n| n.kind) {
                        outcome.absorb(store.dispatch(Action::ActivateButton(ButtonId(index))));
                    }
                }
            }
            InputEvent::Resize(..) | InputEvent::FocusGained => {
                self.runtime.reset_pointer_state();
                outcome.needs_redraw = true;
            }
            InputEvent::Key(_) | InputEvent::FocusLost | InputEvent::Paste(_) => {}
        }

        outcome
    }

    fn hovered_button(&self) -> Option<usize> {
        let id = self.runtime.hovered()?;
        match self.tree.node(id)?.kind {
            NodeKind::EmojiButton { index } => Some(index),
            NodeKind::Unknown => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/screen.rs"]
mod tests;
