//! Immediate-mode UI for the magazine page
//!
//! Design principles:
//! - Immediate mode (no retained widget state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod rect;
mod widgets;
mod input;
pub mod theme;
mod actions;
mod transition;

pub use rect::*;
pub use widgets::*;
pub use input::*;
pub use actions::*;
pub use transition::*;
