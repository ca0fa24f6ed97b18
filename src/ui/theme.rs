//! Shared colours

use ratatui::style::Color;

/// Brand blue (#5e8bf4)
pub const BRAND: Color = Color::Rgb(94, 139, 244);
pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
pub const SUCCESS: Color = Color::Green;
/// Secondary button fill, the grey "Previous" button
pub const SECONDARY: Color = Color::Gray;
