//! 3D magazine surface
//!
//! The animated cover model drawn into a reserved region of the page.
//! Shows a text placeholder until the cover texture has loaded; a failed
//! load is returned as an error for the enclosing fault boundary to contain.

pub mod animation;
pub mod cover;
pub mod model;
pub mod orbit;

use macroquad::prelude::*;
use macroquad::logging::info;
use macroquad::models::draw_mesh;
use crate::ui::{theme, MouseState, Rect};
use animation::offset_at;
use cover::{AssetError, CoverImage, PendingCover};
use orbit::{OrbitCamera, PointerGesture};

/// Camera distance from the model
const CAMERA_DISTANCE: f32 = 5.0;

/// Events the surface reports to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The magazine itself was clicked
    MagazineClicked,
}

enum CoverState {
    Loading(PendingCover),
    /// Decoded, waiting for GPU upload on the next draw
    Decoded(CoverImage),
    Uploaded(Texture2D),
}

/// Offscreen target the scene is rendered into, with its pixel size
struct Canvas {
    target: RenderTarget,
    width: u32,
    height: u32,
}

pub struct MagazineSurface {
    cover: CoverState,
    pub orbit: OrbitCamera,
    /// Time (seconds) the surface was last mounted
    mounted_at: f64,
    canvas: Option<Canvas>,
}

impl MagazineSurface {
    pub fn new(cover: PendingCover, now: f64, orbit_sensitivity: f32) -> Self {
        Self {
            cover: CoverState::Loading(cover),
            orbit: OrbitCamera::new(CAMERA_DISTANCE, orbit_sensitivity),
            mounted_at: now,
            canvas: None,
        }
    }

    /// Restart the animation clock and camera (the panel was shown again)
    pub fn mount(&mut self, now: f64) {
        self.mounted_at = now;
        self.orbit.reset();
    }

    /// Seconds since mount
    pub fn elapsed(&self, now: f64) -> f32 {
        (now - self.mounted_at).max(0.0) as f32
    }

    pub fn is_ready(&self) -> bool {
        !matches!(self.cover, CoverState::Loading(_))
    }

    /// Check on the cover load. Errors are fatal for this surface.
    pub fn poll(&mut self) -> Result<(), AssetError> {
        if let CoverState::Loading(pending) = &mut self.cover {
            if let Some(result) = pending.take() {
                let image = result?;
                info!("Cover loaded ({}x{})", image.width, image.height);
                self.cover = CoverState::Decoded(image);
            }
        }
        Ok(())
    }

    /// Orbit drags and clicks on the model. Ignored until the cover is in.
    pub fn handle_mouse(&mut self, rect: &Rect, mouse: &MouseState, now: f64) -> Option<SurfaceEvent> {
        if !self.is_ready() {
            return None;
        }
        match self.orbit.handle_mouse(rect, mouse)? {
            PointerGesture::Click { x, y } if rect.contains(x, y) => {
                let ray = self.orbit.screen_to_ray(rect, x, y);
                model::ray_hit(&ray, offset_at(self.elapsed(now))).map(|_| SurfaceEvent::MagazineClicked)
            }
            _ => None,
        }
    }

    /// Poll the cover and handle input for this frame
    pub fn update(&mut self, rect: &Rect, mouse: &MouseState, now: f64) -> Result<Option<SurfaceEvent>, AssetError> {
        self.poll()?;
        Ok(self.handle_mouse(rect, mouse, now))
    }

    /// Render into the offscreen target and composite it at `rect`
    pub fn draw(&mut self, rect: Rect, now: f64) {
        if rect.w < 1.0 || rect.h < 1.0 {
            return;
        }

        if let CoverState::Decoded(image) = &self.cover {
            let texture = Texture2D::from_rgba8(image.width, image.height, &image.rgba);
            texture.set_filter(FilterMode::Linear);
            self.cover = CoverState::Uploaded(texture);
        }
        let CoverState::Uploaded(texture) = &self.cover else {
            draw_placeholder(rect);
            return;
        };

        // Render target in physical pixels
        let dpi = screen_dpi_scale();
        let width = (rect.w * dpi).round().max(1.0) as u32;
        let height = (rect.h * dpi).round().max(1.0) as u32;
        let resized = self.canvas.as_ref().map_or(true, |c| c.width != width || c.height != height);
        if resized {
            let target = render_target(width, height);
            target.texture.set_filter(FilterMode::Linear);
            self.canvas = Some(Canvas { target, width, height });
        }
        let Some(canvas) = &self.canvas else {
            return;
        };

        let camera = self.orbit.to_camera(rect.w / rect.h, Some(canvas.target.clone()));
        set_camera(&camera);
        clear_background(theme::CANVAS_BG);
        let mesh = model::build_mesh(offset_at(self.elapsed(now)), camera.position, Some(texture.clone()));
        draw_mesh(&mesh);
        set_default_camera();

        draw_texture_ex(
            &canvas.target.texture,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

/// Shown in the canvas region while the cover is still loading
fn draw_placeholder(rect: Rect) {
    let text = "Loading 3D experience...";
    let dims = measure_text(text, None, theme::FONT_SIZE_BODY as u16, 1.0);
    draw_text(
        text,
        (rect.center_x() - dims.width * 0.5).round(),
        (rect.center_y() + dims.height * 0.5).round(),
        theme::FONT_SIZE_BODY,
        theme::TEXT_MUTED,
    );
}
