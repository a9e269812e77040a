//! Color palettes for the two display themes.

use ratatui::style::Color;

/// Colors the render pass draws with.
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub price: Color,
    pub error: Color,
    /// Background for the selected list row.
    pub highlight: Color,
    /// Background for the toast overlay.
    pub overlay: Color,
}

pub const LIGHT: Palette = Palette {
    text: Color::Rgb(0x1f, 0x29, 0x37),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x9c, 0xa3, 0xaf),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    price: Color::Rgb(0x15, 0x80, 0x3d),
    error: Color::Rgb(0xb9, 0x1c, 0x1c),
    highlight: Color::Rgb(0xdb, 0xea, 0xfe),
    overlay: Color::Rgb(0x37, 0x41, 0x51),
};

pub const DARK: Palette = Palette {
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    price: Color::Rgb(0x22, 0xc5, 0x5e),
    error: Color::Rgb(0xef, 0x44, 0x44),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    overlay: Color::Rgb(0x26, 0x26, 0x26),
};

/// Theme selection. Starts light, toggled from the product screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        if self.dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn label(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}
