use compact_str::CompactString;

/// Position of a button inside its [`super::EmojiSelector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub usize);

/// One selectable emoji.
///
/// `selected` is view-model state; the emoji row widget renders it as the
/// selection marker. Only the selector flips it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiButton {
    emoji: CompactString,
    selected: bool,
}

impl EmojiButton {
    pub fn new(emoji: impl Into<CompactString>) -> Self {
        Self {
            emoji: emoji.into(),
            selected: false,
        }
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns whether the flag actually changed.
    pub(super) fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }
}
