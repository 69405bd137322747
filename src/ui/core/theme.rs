use crate::ui::core::style::Color;

/// Semantic colour slots for the picker UI.
///
/// Widgets ask for tokens instead of concrete colours so the settings file can
/// restyle everything in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Fg,
    MutedFg,
    AccentFg,
    WarningFg,
    ButtonBorder,
    ButtonHoverBg,
    SelectedBg,
    SelectedFg,
    SelectedRing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub muted_fg: Color,
    pub accent_fg: Color,
    pub warning_fg: Color,
    pub button_border: Color,
    pub button_hover_bg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub selected_ring: Color,
}

impl Theme {
    pub fn color(&self, token: Token) -> Color {
        match token {
            Token::Fg => self.fg,
            Token::MutedFg => self.muted_fg,
            Token::AccentFg => self.accent_fg,
            Token::WarningFg => self.warning_fg,
            Token::ButtonBorder => self.button_border,
            Token::ButtonHoverBg => self.button_hover_bg,
            Token::SelectedBg => self.selected_bg,
            Token::SelectedFg => self.selected_fg,
            Token::SelectedRing => self.selected_ring,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            muted_fg: Color::Indexed(8),         // DarkGray
            accent_fg: Color::Indexed(6),        // Cyan
            warning_fg: Color::Indexed(3),       // Yellow
            button_border: Color::Indexed(8),    // DarkGray
            button_hover_bg: Color::Indexed(236),
            selected_bg: Color::Rgb(224, 231, 255), // indigo-100
            selected_fg: Color::Indexed(0),
            selected_ring: Color::Rgb(99, 102, 241), // indigo-500
        }
    }
}
