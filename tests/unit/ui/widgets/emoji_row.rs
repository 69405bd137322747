use super::*;
use crate::picker::{ButtonId, EmojiSelector, FieldId, Form};
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;
use crate::ui::core::tree::UiTree;

fn styles() -> EmojiRowStyles {
    EmojiRowStyles {
        base: Style::default(),
        border: Style::default().fg(Color::Indexed(8)),
        hover: Style::default().bg(Color::Indexed(236)),
        selected: Style::default().bg(Color::Rgb(224, 231, 255)),
        ring: Style::default().fg(Color::Rgb(99, 102, 241)),
    }
}

fn selector_with(selected: Option<usize>) -> EmojiSelector {
    let id = FieldId::from("selected-emoji");
    let mut selector = EmojiSelector::new(["😀", "😂", "🎉"], id.clone());
    let mut form = Form::new().with_hidden_field(id, "emoji");
    if let Some(idx) = selected {
        selector.activate(ButtonId(idx), &mut form);
    }
    selector
}

fn render(selector: &EmojiSelector, hovered: Option<usize>, w: u16) -> (TestBackend, UiTree) {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let area = Rect::new(0, 0, w, BUTTON_HEIGHT);
    {
        let mut ui = Ui::new(area, &mut painter, &mut tree);
        EmojiRow {
            id_base: IdPath::root("test_row"),
            layer: 0,
            buttons: selector.buttons(),
            hovered,
            styles: styles(),
        }
        .ui(&mut ui);
    }
    let mut backend = TestBackend::new(w, BUTTON_HEIGHT);
    backend.draw(area, painter.cmds());
    (backend, tree)
}

#[test]
fn row_is_centred_with_one_cell_gaps() {
    let selector = selector_with(None);
    let row = EmojiRow {
        id_base: IdPath::root("test_row"),
        layer: 0,
        buttons: selector.buttons(),
        hovered: None,
        styles: styles(),
    };

    assert_eq!(
        row.layout(Rect::new(0, 0, 30, 3)),
        vec![
            Rect::new(5, 0, 6, 3),
            Rect::new(12, 0, 6, 3),
            Rect::new(19, 0, 6, 3),
        ]
    );
}

#[test]
fn every_button_registers_a_click_node() {
    let selector = selector_with(None);
    let (_, tree) = render(&selector, None, 30);

    let indices: Vec<usize> = tree
        .nodes()
        .iter()
        .filter(|n| n.sense.contains(Sense::CLICK))
        .filter_map(|n| match n.kind {
            NodeKind::EmojiButton { index } => Some(index),
            NodeKind::Unknown => None,
        })
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn unselected_row_has_no_marker() {
    let selector = selector_with(None);
    let (backend, _) = render(&selector, None, 30);
    let buf = backend.buffer();

    for x in [5, 12, 19] {
        assert_eq!(buf.cell(x, 0).unwrap().symbol, "┌");
        assert_eq!(buf.cell(x + 1, 1).unwrap().style.bg, None);
    }
    assert_eq!(buf.cell(7, 1).unwrap().symbol, "😀");
}

#[test]
fn only_the_selected_button_carries_the_marker() {
    let selector = selector_with(Some(1));
    let (backend, _) = render(&selector, None, 30);
    let buf = backend.buffer();

    assert_eq!(buf.cell(12, 0).unwrap().symbol, "┏");
    assert_eq!(buf.cell(12, 0).unwrap().style.fg, Some(Color::Rgb(99, 102, 241)));
    assert_eq!(buf.cell(14, 1).unwrap().symbol, "😂");
    assert_eq!(buf.cell(14, 1).unwrap().style.bg, Some(Color::Rgb(224, 231, 255)));

    assert_eq!(buf.cell(5, 0).unwrap().symbol, "┌");
    assert_eq!(buf.cell(19, 0).unwrap().symbol, "┌");
    assert_eq!(buf.cell(21, 1).unwrap().style.bg, None);
}

#[test]
fn hover_fill_does_not_override_selection() {
    let selector = selector_with(Some(0));
    let (backend, _) = render(&selector, Some(0), 30);
    assert_eq!(
        backend.buffer().cell(6, 1).unwrap().style.bg,
        Some(Color::Rgb(224, 231, 255))
    );

    let (backend, _) = render(&selector, Some(2), 30);
    assert_eq!(
        backend.buffer().cell(20, 1).unwrap().style.bg,
        Some(Color::Indexed(236))
    );
}

#[test]
fn buttons_that_do_not_fit_are_not_clickable() {
    let selector = selector_with(None);
    let (_, tree) = render(&selector, None, 13);

    let count = tree
        .nodes()
        .iter()
        .filter(|n| matches!(n.kind, NodeKind::EmojiButton { .. }))
        .count();
    assert_eq!(count, 2);
}

#[test]
fn too_short_area_draws_nothing() {
    let selector = selector_with(None);
    let row = EmojiRow {
        id_base: IdPath::root("test_row"),
        layer: 0,
        buttons: selector.buttons(),
        hovered: None,
        styles: styles(),
    };
    assert!(row.layout(Rect::new(0, 0, 30, 2)).is_empty());
}

#[test]
fn narrow_emoji_still_gets_a_two_cell_slot() {
    assert_eq!(button_width("x"), 6);
    assert_eq!(button_width("🎉"), 6);
}

#[test]
fn oversized_emoji_does_not_overflow_layout() {
    let huge = "x".repeat(70_000);
    assert_eq!(button_width(&huge), u16::MAX);

    let buttons = [EmojiButton::new("😀"), EmojiButton::new(huge.as_str())];
    let row = EmojiRow {
        id_base: IdPath::root("test_row"),
        layer: 0,
        buttons: &buttons,
        hovered: None,
        styles: styles(),
    };
    assert_eq!(row.layout(Rect::new(0, 0, 40, BUTTON_HEIGHT)).len(), 1);

    let alone = [EmojiButton::new(huge.as_str())];
    let row = EmojiRow {
        buttons: &alone,
        ..row
    };
    let rects = row.layout(Rect::new(0, 0, u16::MAX, BUTTON_HEIGHT));
    assert_eq!(rects, [Rect::new(0, 0, u16::MAX, BUTTON_HEIGHT)]);
}
