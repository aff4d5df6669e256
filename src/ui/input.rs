//! Per-frame input state for the page widgets

use macroquad::prelude::*;
use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
    pub scroll: f32,         // Scroll wheel delta
}

impl MouseState {
    /// Sample macroquad's input for this frame
    pub fn capture() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: mouse_wheel().1,
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is held down inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// Set while a modal layer owns the mouse; widgets underneath see nothing
    blocked: bool,
    tooltip: Option<(String, f32, f32)>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            blocked: false,
            tooltip: None,
        }
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.blocked = false;
        self.tooltip = None;
    }

    /// Mouse state as seen by widgets: inert while a modal is up
    pub fn pointer(&self) -> MouseState {
        if self.blocked {
            MouseState { x: f32::NEG_INFINITY, y: f32::NEG_INFINITY, ..Default::default() }
        } else {
            self.mouse
        }
    }

    /// Swallow mouse input for everything drawn until `end_modal`
    pub fn begin_modal(&mut self) {
        self.blocked = true;
    }

    pub fn end_modal(&mut self) {
        self.blocked = false;
    }

    pub fn set_tooltip(&mut self, text: &str, x: f32, y: f32) {
        self.tooltip = Some((text.to_string(), x, y));
    }

    pub fn tooltip(&self) -> Option<&(String, f32, f32)> {
        self.tooltip.as_ref()
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_blocks_pointer() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState { x: 10.0, y: 10.0, left_pressed: true, ..Default::default() });
        let r = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(ctx.pointer().clicked(&r));

        ctx.begin_modal();
        assert!(!ctx.pointer().clicked(&r));
        ctx.end_modal();
        assert!(ctx.pointer().clicked(&r));

        // A new frame clears the block and tooltip
        ctx.begin_modal();
        ctx.set_tooltip("hint", 1.0, 2.0);
        ctx.begin_frame(MouseState::default());
        assert!(ctx.tooltip().is_none());
        ctx.begin_frame(MouseState { x: 10.0, y: 10.0, left_pressed: true, ..Default::default() });
        assert!(ctx.pointer().clicked(&r));
    }
}
