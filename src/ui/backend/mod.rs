//! Rendering backends.
//!
//! Widgets only produce [`PaintCmd`]s; a backend turns them into cells. The
//! headless [`test::TestBackend`] is always available, the terminal backend
//! only with the `tui` feature.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
