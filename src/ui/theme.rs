use ratatui::style::Color;

pub const EMBER: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const EMBER_DIM: Color = Color::Rgb(0x7f, 0x1d, 0x1d);
pub const TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const TEXT_DIM: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
pub const TEXT_FAINT: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const BORDER: Color = Color::Rgb(0x27, 0x27, 0x2a);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
