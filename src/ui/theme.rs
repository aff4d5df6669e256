//! Page theme - shared colors and type sizes
//!
//! Light paper look for the magazine pages, dark accent for interactive bits.

use macroquad::prelude::Color;

// =============================================================================
// Base Colors
// =============================================================================

/// Page background
pub const BG_COLOR: Color = Color::new(0.98, 0.97, 0.95, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.09, 0.09, 0.10, 1.0);

/// Secondary/blurb text
pub const TEXT_MUTED: Color = Color::new(0.42, 0.42, 0.45, 1.0);

/// Hairline borders between page regions
pub const BORDER_COLOR: Color = Color::new(0.86, 0.85, 0.82, 1.0);

/// Accent (nav highlight, buttons)
pub const ACCENT_COLOR: Color = Color::new(0.91, 0.30, 0.16, 1.0);

/// Accent at 90% for hovered buttons
pub const ACCENT_HOVER: Color = Color::new(0.82, 0.27, 0.14, 1.0);

/// Text on accent backgrounds
pub const ACCENT_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Behind the 3D model
pub const CANVAS_BG: Color = Color::new(0.93, 0.92, 0.90, 1.0);

/// Ghost button hover background
pub const GHOST_HOVER: Color = Color::new(0.91, 0.90, 0.87, 1.0);

/// Tooltip background
pub const TOOLTIP_BG: Color = Color::new(0.15, 0.15, 0.17, 0.95);

// =============================================================================
// Font Sizes
// =============================================================================

/// Article title in the overlay
pub const FONT_SIZE_TITLE: f32 = 40.0;

/// Section headings (panel titles, article h2)
pub const FONT_SIZE_HEADING: f32 = 28.0;

/// Brand in the header, article list titles
pub const FONT_SIZE_SUBHEADING: f32 = 22.0;

/// Body copy
pub const FONT_SIZE_BODY: f32 = 18.0;

/// Blurbs, excerpts, footer
pub const FONT_SIZE_SMALL: f32 = 15.0;
