//! Rectangle type for page layout

/// A rectangle defined by position and size (logical pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        self.pad_xy(padding, padding)
    }

    /// Shrink by separate horizontal and vertical padding
    pub fn pad_xy(&self, px: f32, py: f32) -> Self {
        Self::new(
            self.x + px,
            self.y + py,
            (self.w - px * 2.0).max(0.0),
            (self.h - py * 2.0).max(0.0),
        )
    }

    /// Split horizontally at ratio (0.0 - 1.0), returns (left, right)
    pub fn split_h(&self, ratio: f32) -> (Self, Self) {
        let split_x = self.w * ratio.clamp(0.0, 1.0);
        (
            Self::new(self.x, self.y, split_x, self.h),
            Self::new(self.x + split_x, self.y, self.w - split_x, self.h),
        )
    }

    /// Cut a strip off the top, returns (strip, rest)
    pub fn take_top(&self, height: f32) -> (Self, Self) {
        let h = height.clamp(0.0, self.h);
        (
            Self::new(self.x, self.y, self.w, h),
            Self::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Cut a strip off the bottom, returns (rest, strip)
    pub fn take_bottom(&self, height: f32) -> (Self, Self) {
        let h = height.clamp(0.0, self.h);
        (
            Self::new(self.x, self.y, self.w, self.h - h),
            Self::new(self.x, self.bottom() - h, self.w, h),
        )
    }

    /// Same height, width capped at `max_w` and centered horizontally
    pub fn centered_max_w(&self, max_w: f32) -> Self {
        let w = self.w.min(max_w);
        Self::new((self.x + (self.w - w) * 0.5).round(), self.y, w, self.h)
    }

    /// Move by an offset
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_h() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let (left, right) = r.split_h(0.5);
        assert!((left.w - 50.0).abs() < 0.001);
        assert!((right.x - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_take_strips() {
        let r = Rect::new(0.0, 10.0, 100.0, 200.0);
        let (top, rest) = r.take_top(30.0);
        assert_eq!(top, Rect::new(0.0, 10.0, 100.0, 30.0));
        assert_eq!(rest, Rect::new(0.0, 40.0, 100.0, 170.0));

        let (rest, bottom) = rest.take_bottom(500.0);
        assert_eq!(rest.h, 0.0);
        assert_eq!(bottom.h, 170.0);
    }

    #[test]
    fn test_centered_max_w() {
        let r = Rect::new(0.0, 0.0, 1000.0, 50.0).centered_max_w(800.0);
        assert_eq!(r, Rect::new(100.0, 0.0, 800.0, 50.0));
        // Narrower than the cap: unchanged
        let r = Rect::new(5.0, 0.0, 300.0, 50.0);
        assert_eq!(r.centered_max_w(800.0), r);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.translate(0.0, 100.0).contains(50.0, 40.0));
    }
}
