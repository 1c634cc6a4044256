//! # Theme System
//!
//! Colors for the studio chrome: borders, labels, selection highlight and
//! the copy button. Segment colors chosen by the user are never themed; the
//! preview always shows them as picked.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**
//!
//! `t` cycles through them in this order and the choice is saved to the
//! config file.

use ratatui::style::Color;

/// All colors used by the studio, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config.
    pub name: &'static str,

    /// Panel background, and the terminal background of the preview.
    pub bg: Color,

    /// Primary text color.
    pub fg: Color,
    /// Hints, separators, inactive style toggles.
    pub fg_dim: Color,

    /// Focused borders and the palette cursor.
    pub accent: Color,
    /// Category titles and the `PS1=` readout.
    pub secondary: Color,

    /// Copy confirmation.
    pub success: Color,
    /// Remove hints and input errors.
    pub error: Color,

    /// Background of the selected row and of a row being dragged.
    pub selection_bg: Color,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycle order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after `self` in cycle order, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let pos = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(pos + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),
        fg: Color::Rgb(205, 214, 244),
        fg_dim: Color::Rgb(108, 112, 134),
        accent: Color::Rgb(137, 180, 250),
        secondary: Color::Rgb(249, 226, 175),
        success: Color::Rgb(166, 227, 161),
        error: Color::Rgb(243, 139, 168),
        selection_bg: Color::Rgb(69, 71, 90),
    },
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),
        fg: Color::Rgb(202, 211, 245),
        fg_dim: Color::Rgb(110, 115, 141),
        accent: Color::Rgb(138, 173, 244),
        secondary: Color::Rgb(238, 212, 159),
        success: Color::Rgb(166, 218, 149),
        error: Color::Rgb(237, 135, 150),
        selection_bg: Color::Rgb(73, 77, 100),
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),
        secondary: Color::Rgb(241, 250, 140),
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        secondary: Color::Rgb(250, 189, 47),
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        selection_bg: Color::Rgb(80, 73, 69),
    },
];
