use ratatui::style::Color;

// Input chrome
pub const BORDER_DEFAULT: Color = Color::White;

// Demo chrome
pub const ACCENT: Color = Color::Cyan;
pub const STATUS_TEXT: Color = Color::Gray;
