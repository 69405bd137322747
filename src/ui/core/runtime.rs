use super::geom::Pos;
use super::id::Id;
use super::input::UiEvent;
use super::tree::{Sense, UiTree};
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};

#[derive(Debug, Clone, Default)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    target: Option<Id>,
}

/// Turns raw mouse input into widget-level events using last frame's
/// [`UiTree`].
///
/// A click is reported on release, and only when press and release land on
/// the same clickable node.
#[derive(Debug, Default)]
pub struct UiRuntime {
    hovered: Option<Id>,
    pressed: Option<PressedState>,
    last_pos: Option<Pos>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn last_pos(&self) -> Option<Pos> {
        self.last_pos
    }

    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
    }

    pub fn on_input(&mut self, input: &InputEvent, tree: &UiTree) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::default();

        let InputEvent::Mouse(me) = input else {
            return out;
        };

        let pos = Pos::new(me.column, me.row);
        self.last_pos = Some(pos);

        let next_hover = tree.hit_test(pos, Sense::HOVER).map(|n| n.id);
        if next_hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: next_hover,
                pos,
            });
            self.hovered = next_hover;
            out.needs_redraw = true;
        }

        match me.kind {
            MouseEventKind::Down(button) => {
                self.pressed = Some(PressedState {
                    button,
                    target: tree.hit_test(pos, Sense::CLICK).map(|n| n.id),
                });
            }
            MouseEventKind::Up(button) => {
                let Some(pressed) = self.pressed.take() else {
                    return out;
                };
                if pressed.button != button {
                    return out;
                }
                let released_on = tree.hit_test(pos, Sense::CLICK).map(|n| n.id);
                if let Some(id) = pressed.target.filter(|id| Some(*id) == released_on) {
                    out.events.push(UiEvent::Click { id, button, pos });
                    out.needs_redraw = true;
                }
            }
            MouseEventKind::Drag(_)
            | MouseEventKind::Moved
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {}
        }

        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
