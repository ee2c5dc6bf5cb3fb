//! Color theme and glyphs for the Lootdrop TUI.
//!
//! Uses the Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use lootdrop_engine::UiOptions;
use lootdrop_types::ColorTag;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_POPUP: Color = Color::Rgb(54, 54, 70); // sumiInk5
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Accents ===
    pub const VIOLET: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub peach: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub violet: Color,
    pub cyan: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::VIOLET,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::YELLOW,
            peach: colors::ORANGE,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
            violet: colors::VIOLET,
            cyan: colors::CYAN,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            peach: Color::Yellow,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
            violet: Color::Magenta,
            cyan: Color::Cyan,
        }
    }

    /// Accent color of a catalog color tag.
    #[must_use]
    pub fn tag(&self, tag: ColorTag) -> Color {
        match tag {
            ColorTag::Yellow => self.yellow,
            ColorTag::Red => self.red,
            ColorTag::Violet => self.violet,
            ColorTag::Cyan => self.cyan,
            ColorTag::Green => self.green,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and bars.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub cart: &'static str,
    pub selected: &'static str,
    pub check: &'static str,
    pub blocked: &'static str,
    pub search: &'static str,
    pub prompt: &'static str,
    pub cursor: &'static str,
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            cart: "[cart]",
            selected: ">",
            check: "OK",
            blocked: "X",
            search: "?",
            prompt: ">",
            cursor: "_",
            bar_full: "#",
            bar_empty: "-",
            separator: "|",
        }
    } else {
        Glyphs {
            cart: "🛒",
            selected: "▸",
            check: "✓",
            blocked: "⊘",
            search: "⌕",
            prompt: "›",
            cursor: "█",
            bar_full: "█",
            bar_empty: "░",
            separator: "│",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.red)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.green)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_disabled(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted).bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn struck_price(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    #[must_use]
    pub fn final_price(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn highlight_term(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.cart, g.selected, g.check, g.blocked, g.search, g.prompt, g.cursor,
            g.bar_full, g.bar_empty, g.separator,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} is not ascii");
        }
    }

    #[test]
    fn high_contrast_uses_named_colors() {
        let options = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        assert_eq!(palette(options).text_primary, Color::White);
        assert_eq!(palette(UiOptions::default()).text_primary, colors::TEXT_PRIMARY);
    }

    #[test]
    fn every_tag_has_a_distinct_color() {
        let p = Palette::standard();
        let tags = [
            ColorTag::Yellow,
            ColorTag::Red,
            ColorTag::Violet,
            ColorTag::Cyan,
            ColorTag::Green,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(p.tag(*a), p.tag(*b));
            }
        }
    }
}
