//! Magazine model geometry, lighting and picking
//!
//! A single box (3 x 4 x 0.2) with the cover on every face. Vertices are
//! transformed on the CPU each frame (yaw, then bob) and shaded per face
//! from an ambient term, one point light and a soft studio fill.

use macroquad::prelude::*;
use macroquad::models::{Mesh, Vertex};
use super::animation::AnimationOffset;
use super::orbit::Ray;

/// Half extents of the magazine box
pub const HALF_EXTENTS: Vec3 = Vec3::new(1.5, 2.0, 0.1);

/// Ambient light intensity
const AMBIENT: f32 = 0.5;

/// Point light (position, intensity)
const POINT_LIGHT_POS: Vec3 = Vec3::new(10.0, 10.0, 10.0);
const POINT_LIGHT_INTENSITY: f32 = 0.6;

/// Studio environment fill: soft light from above and the front
const STUDIO_FILL_DIR: Vec3 = Vec3::new(0.0, 0.5, 1.0);
const STUDIO_FILL_INTENSITY: f32 = 0.25;

/// One face of the box: outward normal plus the two in-plane axes used to
/// lay out its corners (u to the right, v up, as seen from outside)
struct Face {
    normal: Vec3,
    u: Vec3,
    v: Vec3,
}

const FACES: [Face; 6] = [
    // Front (+Z) and back (-Z)
    Face { normal: Vec3::Z, u: Vec3::X, v: Vec3::Y },
    Face { normal: Vec3::NEG_Z, u: Vec3::NEG_X, v: Vec3::Y },
    // Right (+X) and left (-X)
    Face { normal: Vec3::X, u: Vec3::NEG_Z, v: Vec3::Y },
    Face { normal: Vec3::NEG_X, u: Vec3::Z, v: Vec3::Y },
    // Top (+Y) and bottom (-Y)
    Face { normal: Vec3::Y, u: Vec3::X, v: Vec3::NEG_Z },
    Face { normal: Vec3::NEG_Y, u: Vec3::X, v: Vec3::Z },
];

/// Model transform for a given animation offset
fn transform(offset: AnimationOffset) -> Mat4 {
    Mat4::from_translation(vec3(0.0, offset.position_y, 0.0)) * Mat4::from_rotation_y(offset.rotation_y)
}

/// Diffuse shade (0.0-1.0) for a surface point with the given world normal
pub fn shade(normal: Vec3, world_pos: Vec3) -> f32 {
    let to_light = (POINT_LIGHT_POS - world_pos).normalize();
    let point = normal.dot(to_light).max(0.0) * POINT_LIGHT_INTENSITY;
    let fill = normal.dot(STUDIO_FILL_DIR.normalize()).max(0.0) * STUDIO_FILL_INTENSITY;
    (AMBIENT + point + fill).clamp(0.0, 1.0)
}

/// Build the transformed, shaded mesh. Faces pointing away from `eye` are
/// skipped: the box is convex, so this replaces a depth buffer.
pub fn build_mesh(offset: AnimationOffset, eye: Vec3, texture: Option<Texture2D>) -> Mesh {
    let model = transform(offset);
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for face in &FACES {
        let center_local = face.normal * HALF_EXTENTS;
        let center = model.transform_point3(center_local);
        let normal = model.transform_vector3(face.normal).normalize();
        if normal.dot(eye - center) <= 0.0 {
            continue;
        }

        let s = shade(normal, center);
        let color = Color::new(s, s, s, 1.0);
        let hu = face.u * HALF_EXTENTS;
        let hv = face.v * HALF_EXTENTS;

        let base = vertices.len() as u16;
        // Corners: bottom-left, bottom-right, top-right, top-left
        for (du, dv, tu, tv) in [(-1.0, -1.0, 0.0, 1.0), (1.0, -1.0, 1.0, 1.0), (1.0, 1.0, 1.0, 0.0), (-1.0, 1.0, 0.0, 0.0)] {
            let p = model.transform_point3(center_local + hu * du + hv * dv);
            vertices.push(Vertex::new(p.x, p.y, p.z, tu, tv, color));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices, texture }
}

/// Distance along `ray` to the animated box, if it hits
pub fn ray_hit(ray: &Ray, offset: AnimationOffset) -> Option<f32> {
    // Move the ray into model space instead of moving the box
    let inverse = transform(offset).inverse();
    let origin = inverse.transform_point3(ray.origin);
    let dir = inverse.transform_vector3(ray.direction);

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, h) = (origin[axis], dir[axis], HALF_EXTENTS[axis]);
        if d.abs() < 1e-8 {
            if o.abs() > h {
                return None;
            }
            continue;
        }
        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max < t_min.max(0.0) {
        None
    } else {
        Some(t_min.max(0.0))
    }
}
