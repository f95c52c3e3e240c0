//! Theme palettes

use crate::core::types::ThemeId;

/// RGB color parsed from the palette's hex accent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// 24-bit ANSI foreground escape for terminals
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// A fixed palette record chosen at adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub label: &'static str,
    /// Background gradient stops, top to bottom
    pub background: [Color; 3],
    pub accent: Color,
    pub border: Color,
}

const SAKURA_PINK: Palette = Palette {
    label: "Sakura Pink",
    background: [Color::new(0xfc, 0xe7, 0xf3), Color::new(0xfa, 0xe8, 0xff), Color::new(0xed, 0xe9, 0xfe)],
    accent: Color::new(0xf4, 0x72, 0xb6),
    border: Color::new(0xf9, 0xa8, 0xd4),
};

const SKY_BLUE: Palette = Palette {
    label: "Sky Blue",
    background: [Color::new(0xe0, 0xf2, 0xfe), Color::new(0xcf, 0xfa, 0xfe), Color::new(0xdb, 0xea, 0xfe)],
    accent: Color::new(0x38, 0xbd, 0xf8),
    border: Color::new(0x7d, 0xd3, 0xfc),
};

const SLIME_GREEN: Palette = Palette {
    label: "Slime Green",
    background: [Color::new(0xdc, 0xfc, 0xe7), Color::new(0xd1, 0xfa, 0xe5), Color::new(0xcc, 0xfb, 0xf1)],
    accent: Color::new(0x4a, 0xde, 0x80),
    border: Color::new(0x86, 0xef, 0xac),
};

pub fn palette(theme: ThemeId) -> &'static Palette {
    match theme {
        ThemeId::Pink => &SAKURA_PINK,
        ThemeId::Blue => &SKY_BLUE,
        ThemeId::Green => &SLIME_GREEN,
    }
}

/// Reset escape paired with `Color::ansi_fg`
pub const ANSI_RESET: &str = "\x1b[0m";
