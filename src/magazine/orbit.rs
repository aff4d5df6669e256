//! Orbit camera and pick rays
//!
//! Rotate-only orbit around the model (no zoom, no pan). Left-drag changes
//! azimuth/elevation; a press that barely moves is reported as a click.

use macroquad::prelude::*;
use crate::ui::{MouseState, Rect};

/// Distance the pointer may travel before a press becomes a drag (logical px)
pub const CLICK_SLOP: f32 = 4.0;

/// Elevation limit so the camera never flips over the poles
const MAX_ELEVATION: f32 = 1.4;

/// A 3D ray with origin and direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3, // Normalized
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// In-progress pointer press on the canvas
#[derive(Debug, Clone, Copy)]
struct Press {
    start: (f32, f32),
    last: (f32, f32),
    dragged: bool,
}

/// What a finished pointer press turned out to be
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerGesture {
    /// Released without moving past the slop, at this screen position
    Click { x: f32, y: f32 },
    /// Released after rotating the camera
    Drag,
}

/// Rotate-only orbit camera looking at a fixed target
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32,   // Horizontal angle (radians)
    pub elevation: f32, // Vertical angle (radians)
    /// Vertical field of view (radians)
    pub fovy: f32,
    /// Radians per pixel of drag
    pub sensitivity: f32,
    press: Option<Press>,
}

impl OrbitCamera {
    /// Camera at (0, 0, distance) looking at the origin
    pub fn new(distance: f32, sensitivity: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance,
            azimuth: 0.0,
            elevation: 0.0,
            fovy: 75.0_f32.to_radians(),
            sensitivity,
            press: None,
        }
    }

    /// Put the camera back to its initial orientation
    pub fn reset(&mut self) {
        self.azimuth = 0.0;
        self.elevation = 0.0;
        self.press = None;
    }

    pub fn position(&self) -> Vec3 {
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let (sin_e, cos_e) = self.elevation.sin_cos();
        self.target + vec3(cos_e * sin_a, sin_e, cos_e * cos_a) * self.distance
    }

    /// Rotate by a drag delta in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * self.sensitivity;
        self.elevation = (self.elevation + dy * self.sensitivity).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Feed one frame of mouse state. Presses must start inside `rect`;
    /// once started they are tracked until release even outside it.
    pub fn handle_mouse(&mut self, rect: &Rect, mouse: &MouseState) -> Option<PointerGesture> {
        // Pointer owned by a modal layer: abandon any press
        if !mouse.x.is_finite() || !mouse.y.is_finite() {
            self.press = None;
            return None;
        }

        if mouse.left_pressed && mouse.inside(rect) {
            self.press = Some(Press {
                start: (mouse.x, mouse.y),
                last: (mouse.x, mouse.y),
                dragged: false,
            });
        }

        let mut press = self.press?;

        let (dx, dy) = (mouse.x - press.last.0, mouse.y - press.last.1);
        if !press.dragged {
            let (tx, ty) = (mouse.x - press.start.0, mouse.y - press.start.1);
            press.dragged = (tx * tx + ty * ty).sqrt() > CLICK_SLOP;
        }
        if press.dragged && (dx != 0.0 || dy != 0.0) {
            self.rotate(dx, dy);
        }
        press.last = (mouse.x, mouse.y);

        if mouse.left_released || !mouse.left_down {
            self.press = None;
            return Some(if press.dragged {
                PointerGesture::Drag
            } else {
                PointerGesture::Click { x: mouse.x, y: mouse.y }
            });
        }

        self.press = Some(press);
        None
    }

    /// Ray from the camera through a screen point inside the viewport `rect`
    pub fn screen_to_ray(&self, rect: &Rect, x: f32, y: f32) -> Ray {
        let origin = self.position();
        let forward = (self.target - origin).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);

        let ndc_x = (x - rect.x) / rect.w * 2.0 - 1.0;
        let ndc_y = 1.0 - (y - rect.y) / rect.h * 2.0;
        let half_h = (self.fovy * 0.5).tan();
        let aspect = rect.w / rect.h.max(1.0);

        Ray::new(origin, forward + right * (ndc_x * half_h * aspect) + up * (ndc_y * half_h))
    }

    /// macroquad camera for drawing into a target of the given aspect ratio
    pub fn to_camera(&self, aspect: f32, render_target: Option<RenderTarget>) -> Camera3D {
        Camera3D {
            position: self.position(),
            target: self.target,
            up: Vec3::Y,
            fovy: self.fovy,
            aspect: Some(aspect),
            render_target,
            ..Default::default()
        }
    }
}
