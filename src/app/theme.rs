//! Applies settings colour overrides onto the UI theme.

use crate::settings::ThemeSettings;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::core::theme::{Theme, Token};
use crate::ui::widgets::emoji_row::EmojiRowStyles;

pub fn theme_from_settings(settings: &ThemeSettings) -> Theme {
    let mut theme = Theme::default();
    apply_settings(&mut theme, settings);
    theme
}

pub fn apply_settings(theme: &mut Theme, settings: &ThemeSettings) {
    let slots: [(&Option<String>, &mut Color, &str); 9] = [
        (&settings.fg, &mut theme.fg, "fg"),
        (&settings.muted_fg, &mut theme.muted_fg, "muted_fg"),
        (&settings.accent_fg, &mut theme.accent_fg, "accent_fg"),
        (&settings.warning_fg, &mut theme.warning_fg, "warning_fg"),
        (&settings.button_border, &mut theme.button_border, "button_border"),
        (&settings.button_hover_bg, &mut theme.button_hover_bg, "button_hover_bg"),
        (&settings.selected_bg, &mut theme.selected_bg, "selected_bg"),
        (&settings.selected_fg, &mut theme.selected_fg, "selected_fg"),
        (&settings.selected_ring, &mut theme.selected_ring, "selected_ring"),
    ];

    for (value, slot, name) in slots {
        let Some(value) = value else {
            continue;
        };
        match parse_color(value) {
            Some(c) => *slot = c,
            None => tracing::warn!(slot = name, value = %value, "ignoring unknown colour"),
        }
    }
}

pub fn emoji_row_styles(theme: &Theme) -> EmojiRowStyles {
    EmojiRowStyles {
        base: Style::default().fg(theme.color(Token::Fg)),
        border: Style::default().fg(theme.color(Token::ButtonBorder)),
        hover: Style::default()
            .fg(theme.color(Token::Fg))
            .bg(theme.color(Token::ButtonHoverBg)),
        selected: Style::default()
            .fg(theme.color(Token::SelectedFg))
            .bg(theme.color(Token::SelectedBg)),
        ring: Style::default()
            .fg(theme.color(Token::SelectedRing))
            .add_mod(Mod::BOLD),
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
