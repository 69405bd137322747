use super::*;

#[test]
fn left_click_converts_with_position() {
    let event = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Up(crossterm::event::MouseButton::Left),
        column: 12,
        row: 3,
        modifiers: crossterm::event::KeyModifiers::NONE,
    });

    assert_eq!(
        into_input_event(event),
        InputEvent::Mouse(MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 12, 3))
    );
}

#[test]
fn ctrl_c_keeps_control_modifier() {
    let key = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('c'),
        crossterm::event::KeyModifiers::CONTROL,
    );
    let converted = into_key_event(key);
    assert_eq!(converted.code, KeyCode::Char('c'));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn unsupported_keys_become_unknown() {
    let key = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Insert,
        crossterm::event::KeyModifiers::NONE,
    );
    assert_eq!(into_key_event(key).code, KeyCode::Unknown);
}
