use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ERROR_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const PRICE_GREEN: Color = Color::Rgb(0x16, 0xa3, 0x4a);
pub const STAR_YELLOW: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BADGE_NEW: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const BADGE_POPULAR: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const BADGE_RECOMMENDED: Color = Color::Rgb(0x7c, 0x3a, 0xed);
