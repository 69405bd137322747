use crate::picker::EmojiButton;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use unicode_width::UnicodeWidthStr;

pub const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 1;

#[derive(Clone, Copy, Debug)]
pub struct EmojiRowStyles {
    pub base: Style,
    pub border: Style,
    pub hover: Style,
    /// Fill of the selected button.
    pub selected: Style,
    /// Border of the selected button.
    pub ring: Style,
}

/// Renders a horizontal row of emoji buttons, centred in the widget area.
///
/// Selected buttons get the selection marker (filled background plus a thick
/// ring); every drawn button registers a clickable [`NodeKind::EmojiButton`].
/// Buttons that do not fit are neither drawn nor clickable.
pub struct EmojiRow<'a> {
    pub id_base: IdPath,
    pub layer: u8,
    pub buttons: &'a [EmojiButton],
    pub hovered: Option<usize>,
    pub styles: EmojiRowStyles,
}

/// Border + one cell of padding on each side. Emoji are at least two cells
/// wide even when `unicode-width` reports less.
pub fn button_width(emoji: &str) -> u16 {
    (emoji.width().max(2).min(u16::MAX as usize - 4) as u16) + 4
}

impl EmojiRow<'_> {
    /// Rects of the buttons that fit in `area`, in button order.
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        if area.is_empty() || area.h < BUTTON_HEIGHT {
            return Vec::new();
        }

        let mut widths = Vec::with_capacity(self.buttons.len());
        let mut total: u16 = 0;
        for button in self.buttons {
            let w = button_width(button.emoji());
            let needed = if widths.is_empty() {
                w
            } else {
                w.saturating_add(BUTTON_GAP)
            };
            if total.saturating_add(needed) > area.w {
                break;
            }
            total += needed;
            widths.push(w);
        }

        let row = area.centered(total, BUTTON_HEIGHT);
        let mut x = row.x;
        widths
            .into_iter()
            .map(|w| {
                let rect = Rect::new(x, row.y, w, BUTTON_HEIGHT);
                x = x.saturating_add(w).saturating_add(BUTTON_GAP);
                rect
            })
            .collect()
    }
}

impl Widget for EmojiRow<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let rects = self.layout(ui.rect);
        if rects.len() < self.buttons.len() {
            tracing::debug!(
                shown = rects.len(),
                total = self.buttons.len(),
                width = ui.rect.w,
                "emoji row truncated"
            );
        }

        for (index, (button, rect)) in self.buttons.iter().zip(rects).enumerate() {
            ui.tree.push(Node {
                id: self.id_base.push_index(index).finish(),
                rect,
                layer: self.layer,
                z: 0,
                sense: Sense::CLICK | Sense::HOVER,
                kind: NodeKind::EmojiButton { index },
            });

            let (fill, border, kind) = if button.is_selected() {
                (self.styles.selected, self.styles.ring, BorderKind::Thick)
            } else if self.hovered == Some(index) {
                (self.styles.hover, self.styles.border, BorderKind::Plain)
            } else {
                (self.styles.base, self.styles.border, BorderKind::Plain)
            };

            ui.painter.fill_rect(rect, fill);
            ui.painter.border(rect, fill.patch(border), kind);

            let inner = rect.inset(Insets::xy(2, 1));
            ui.painter
                .text_clipped(Pos::new(inner.x, inner.y), button.emoji(), fill, inner);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/emoji_row.rs"]
mod tests;
