use super::*;
use crate::core::event::{KeyEvent, MouseEvent, MouseEventKind};
use crate::picker::FieldId;
use crate::ui::backend::test::TestBackend;
use crate::ui::core::style::Color;
use crate::ui::core::tree::Node;

const W: u16 = 40;
const H: u16 = 7;

fn setup() -> (PickerScreen, Store, TestBackend) {
    let store = Store::new(PickerState::new(["😀", "😂", "🎉"], "selected-emoji", "emoji"));
    (PickerScreen::new(Theme::default()), store, TestBackend::new(W, H))
}

fn draw(screen: &mut PickerScreen, store: &Store, backend: &mut TestBackend) {
    screen.render(backend, Rect::new(0, 0, W, H), store.state());
}

fn button_node(screen: &PickerScreen, index: usize) -> Node {
    *screen
        .tree()
        .nodes()
        .iter()
        .find(|n| n.kind == NodeKind::EmojiButton { index })
        .expect("button node")
}

fn click(screen: &mut PickerScreen, store: &mut Store, index: usize) -> InputOutcome {
    let rect = button_node(screen, index).rect;
    let (x, y) = (rect.x + 1, rect.y + 1);
    let down = InputEvent::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y));
    let up = InputEvent::Mouse(MouseEvent::new(MouseEventKind::Up(MouseButton::Left), x, y));
    let _ = screen.handle_input(&down, store);
    screen.handle_input(&up, store)
}

/// Background of the padding cell just inside a button's border.
fn fill_bg(backend: &TestBackend, rect: Rect) -> Option<Color> {
    backend.buffer().cell(rect.x + 1, rect.y + 1).unwrap().style.bg
}

fn field_value(store: &Store) -> &str {
    store
        .state()
        .form
        .value(&FieldId::from("selected-emoji"))
        .unwrap_or_default()
}

#[test]
fn first_frame_shows_all_buttons_unselected() {
    let (mut screen, store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);

    for index in 0..3 {
        let rect = button_node(&screen, index).rect;
        assert_eq!(backend.buffer().cell(rect.x, rect.y).unwrap().symbol, "┌");
    }
    assert_eq!(field_value(&store), "");
}

#[test]
fn clicking_a_button_selects_it_and_fills_the_field() {
    let (mut screen, mut store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);

    let outcome = click(&mut screen, &mut store, 1);
    assert!(outcome.needs_redraw);
    assert!(outcome.effects.is_empty());
    assert_eq!(field_value(&store), "😂");

    draw(&mut screen, &store, &mut backend);
    let selected = button_node(&screen, 1).rect;
    let other = button_node(&screen, 0).rect;
    assert_eq!(backend.buffer().cell(selected.x, selected.y).unwrap().symbol, "┏");
    assert_eq!(backend.buffer().cell(other.x, other.y).unwrap().symbol, "┌");
}

#[test]
fn hovered_button_is_drawn_with_hover_background() {
    let (mut screen, mut store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);

    let rect = button_node(&screen, 1).rect;
    let moved = InputEvent::Mouse(MouseEvent::new(MouseEventKind::Moved, rect.x + 1, rect.y + 1));
    let outcome = screen.handle_input(&moved, &mut store);
    assert!(outcome.needs_redraw);

    draw(&mut screen, &store, &mut backend);
    let hover_bg = Some(Theme::default().color(Token::ButtonHoverBg));
    assert_eq!(fill_bg(&backend, rect), hover_bg);
    assert_ne!(fill_bg(&backend, button_node(&screen, 0).rect), hover_bg);

    // Hover survives more than one redraw.
    draw(&mut screen, &store, &mut backend);
    assert_eq!(fill_bg(&backend, button_node(&screen, 1).rect), hover_bg);
}

#[test]
fn second_click_moves_the_marker() {
    let (mut screen, mut store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);
    click(&mut screen, &mut store, 1);
    draw(&mut screen, &store, &mut backend);
    click(&mut screen, &mut store, 2);
    draw(&mut screen, &store, &mut backend);

    assert_eq!(field_value(&store), "🎉");
    let markers: Vec<usize> = (0..3)
        .filter(|&i| {
            let r = button_node(&screen, i).rect;
            backend.buffer().cell(r.x, r.y).unwrap().symbol == "┏"
        })
        .collect();
    assert_eq!(markers, vec![2]);
}

#[test]
fn click_outside_buttons_changes_nothing() {
    let (mut screen, mut store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);

    let down = InputEvent::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0));
    let up = InputEvent::Mouse(MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 0, 0));
    let _ = screen.handle_input(&down, &mut store);
    let outcome = screen.handle_input(&up, &mut store);

    assert!(outcome.effects.is_empty());
    assert_eq!(store.state().selector.selected(), None);
}

#[test]
fn right_click_does_not_activate() {
    let (mut screen, mut store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);

    let rect = button_node(&screen, 0).rect;
    let down = InputEvent::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Right),
        rect.x + 1,
        rect.y + 1,
    ));
    let up = InputEvent::Mouse(MouseEvent::new(
        MouseEventKind::Up(MouseButton::Right),
        rect.x + 1,
        rect.y + 1,
    ));
    let _ = screen.handle_input(&down, &mut store);
    let _ = screen.handle_input(&up, &mut store);

    assert_eq!(store.state().selector.selected(), None);
}

#[test]
fn enter_submits_and_q_quits() {
    let (mut screen, mut store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);
    click(&mut screen, &mut store, 0);

    let outcome = screen.handle_input(&InputEvent::Key(KeyEvent::press(KeyCode::Enter)), &mut store);
    let [Effect::Submit(submission)] = outcome.effects.as_slice() else {
        panic!("expected submit, got {:?}", outcome.effects);
    };
    assert_eq!(submission.get("emoji"), Some("😀"));

    let outcome = screen.handle_input(&InputEvent::Key(KeyEvent::press(KeyCode::Char('q'))), &mut store);
    assert_eq!(outcome.effects, vec![Effect::Quit]);
}

#[test]
fn arrow_keys_do_not_move_the_selection() {
    let (mut screen, mut store, mut backend) = setup();
    draw(&mut screen, &store, &mut backend);

    let outcome = screen.handle_input(&InputEvent::Key(KeyEvent::press(KeyCode::Right)), &mut store);
    assert!(outcome.effects.is_empty());
    assert!(!outcome.needs_redraw);
    assert_eq!(store.state().selector.selected(), None);
}

#[test]
fn empty_palette_renders_a_notice() {
    let mut screen = PickerScreen::new(Theme::default());
    let store = Store::new(PickerState::new(Vec::<String>::new(), "selected-emoji", "emoji"));
    let mut backend = TestBackend::new(W, H);
    draw(&mut screen, &store, &mut backend);

    assert!(backend.buffer().row_text(1).contains("no emojis configured"));
    assert!(screen.tree().nodes().is_empty());
}
