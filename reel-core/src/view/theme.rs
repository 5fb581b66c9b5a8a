//! src/view/theme.rs
//! ============================================================================
//! # Theme: Shared Color Constants
//!
//! One place for the palette so components stay consistent. The accent and
//! backdrop come from the app's visual identity; the rest are semantic.

use ratatui::style::Color;

/// Accent: selection borders, the loading spinner, the header title.
pub const ACCENT: Color = Color::Rgb(0xEC, 0x63, 0x80);
/// Backdrop tint for the splash screen.
pub const BACKDROP: Color = Color::Rgb(0x87, 0x88, 0xE3);
/// De-emphasized text: hints, placeholders, secondary fields.
pub const COMMENT: Color = Color::DarkGray;
pub const RED: Color = Color::Red;
pub const GREEN: Color = Color::Green;
/// Rating stars.
pub const YELLOW: Color = Color::Yellow;
