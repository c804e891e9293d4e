use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const CODE_TEXT: Color = Color::Rgb(0x9c, 0xdc, 0xfe);
pub const QUOTE_TEXT: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const END_MARKER: Color = Color::Rgb(0x6b, 0x72, 0x80);
