use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 217, b: 239 };
pub const SECONDARY: Color = Color::TrueColor { r: 174, g: 129, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 230, g: 219, b: 116 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const VALUE: Color = Color::TrueColor { r: 166, g: 226, b: 46 };
pub const CHECK_PASS: Color = Color::Green;
pub const CHECK_FAIL: Color = Color::Red;
