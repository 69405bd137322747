use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn into_input_event(event: crossterm::event::Event) -> InputEvent {
    match event {
        crossterm::event::Event::Key(key) => InputEvent::Key(into_key_event(key)),
        crossterm::event::Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        crossterm::event::Event::Resize(w, h) => InputEvent::Resize(w, h),
        crossterm::event::Event::FocusGained => InputEvent::FocusGained,
        crossterm::event::Event::FocusLost => InputEvent::FocusLost,
        crossterm::event::Event::Paste(s) => InputEvent::Paste(s),
    }
}

pub fn into_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: into_key_code(event.code),
        modifiers: into_key_modifiers(event.modifiers),
        kind: match event.kind {
            crossterm::event::KeyEventKind::Press => KeyEventKind::Press,
            crossterm::event::KeyEventKind::Repeat => KeyEventKind::Repeat,
            crossterm::event::KeyEventKind::Release => KeyEventKind::Release,
        },
    }
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    for (theirs, ours) in [
        (crossterm::event::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (crossterm::event::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (crossterm::event::KeyModifiers::ALT, KeyModifiers::ALT),
        (crossterm::event::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ] {
        if mods.contains(theirs) {
            out |= ours;
        }
    }
    out
}

fn into_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::F(n) => KeyCode::F(n),
        _ => KeyCode::Unknown,
    }
}

pub fn into_mouse_event(event: crossterm::event::MouseEvent) -> MouseEvent {
    MouseEvent {
        kind: into_mouse_event_kind(event.kind),
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    }
}

fn into_mouse_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

fn into_mouse_event_kind(kind: crossterm::event::MouseEventKind) -> MouseEventKind {
    match kind {
        crossterm::event::MouseEventKind::Down(b) => MouseEventKind::Down(into_mouse_button(b)),
        crossterm::event::MouseEventKind::Up(b) => MouseEventKind::Up(into_mouse_button(b)),
        crossterm::event::MouseEventKind::Drag(b) => MouseEventKind::Drag(into_mouse_button(b)),
        crossterm::event::MouseEventKind::Moved => MouseEventKind::Moved,
        crossterm::event::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        crossterm::event::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        crossterm::event::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        crossterm::event::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
