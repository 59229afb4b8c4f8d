//! Geometry pipeline: model space to screen space.
//!
//! Stateless free functions that transform a mesh through the classic
//! chain - model matrix, MVP, clip space, near-plane rejection, perspective
//! divide, back-face cull, frustum trivial-reject, viewport mapping - and
//! hand screen-space primitives to the rasterizer.
//!
//! Near-plane handling is rejection, not clipping: a triangle or edge with
//! any vertex at W <= 0 is discarded whole. The frustum test is a trivial
//! reject via outcodes; triangles straddling planes are still rasterized
//! and rely on the rasterizer's bounds clamping.

use crate::camera::Camera;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::render::{draw_line, fill_triangle, Aabb, PixelBuffer};
use crate::transform::Transform;

const OUTCODE_RIGHT: u8 = 0b000001; // x > 1
const OUTCODE_LEFT: u8 = 0b000010; // x < -1
const OUTCODE_TOP: u8 = 0b000100; // y > 1
const OUTCODE_BOTTOM: u8 = 0b001000; // y < -1
const OUTCODE_FAR: u8 = 0b010000; // z > 1
const OUTCODE_NEAR: u8 = 0b100000; // z < -1

/// Bitmask of the frustum planes an NDC point violates.
fn compute_outcode(v: Vec3) -> u8 {
    let mut code = 0;
    if v.x > 1.0 {
        code |= OUTCODE_RIGHT;
    }
    if v.x < -1.0 {
        code |= OUTCODE_LEFT;
    }
    if v.y > 1.0 {
        code |= OUTCODE_TOP;
    }
    if v.y < -1.0 {
        code |= OUTCODE_BOTTOM;
    }
    if v.z > 1.0 {
        code |= OUTCODE_FAR;
    }
    if v.z < -1.0 {
        code |= OUTCODE_NEAR;
    }
    code
}

/// Maps an NDC point to screen space.
///
/// X maps from [-1, 1] to [0, width]; Y flips from [-1, 1] to [height, 0]
/// because screen rows grow downward while NDC Y grows upward; Z maps to
/// [0, 1] (computed for a future depth pass, not consumed today).
fn ndc_to_screen(ndc: Vec3, width: u32, height: u32) -> Vec3 {
    Vec3::new(
        (ndc.x + 1.0) * 0.5 * width as f32,
        (1.0 - ndc.y) * 0.5 * height as f32,
        (ndc.z + 1.0) * 0.5,
    )
}

/// Round-to-nearest via +0.5 truncation, matching the rasterizer's integer
/// coordinate domain.
#[inline]
fn round_to_pixel(v: f32) -> i32 {
    (v + 0.5) as i32
}

/// Renders a mesh as filled triangles.
///
/// Runs the full per-triangle sequence: MVP transform, near-plane
/// rejection, perspective divide, back-face cull, frustum trivial-reject,
/// viewport mapping, then the edge-function fill.
pub fn draw_filled(
    mesh: &Mesh,
    transform: &Transform,
    camera: &mut Camera,
    buffer: &mut PixelBuffer,
    color: u32,
) {
    let mvp = camera.view_projection_matrix() * transform.to_matrix();
    let vertices = mesh.vertices();
    let (width, height) = (buffer.width(), buffer.height());

    for triangle in mesh.indices().chunks_exact(3) {
        let clip: [Vec4; 3] = [
            mvp * vertices[triangle[0] as usize],
            mvp * vertices[triangle[1] as usize],
            mvp * vertices[triangle[2] as usize],
        ];

        // Near-plane rejection: any vertex at or behind the camera kills
        // the whole triangle.
        if clip[0].w <= 0.0 || clip[1].w <= 0.0 || clip[2].w <= 0.0 {
            continue;
        }

        let ndc = [
            clip[0].perspective_divide(),
            clip[1].perspective_divide(),
            clip[2].perspective_divide(),
        ];

        // Back-face cull: positive Z in NDC points away from the camera.
        let normal = (ndc[1] - ndc[0]).cross(ndc[2] - ndc[0]);
        if normal.z > 0.0 {
            continue;
        }

        // Frustum trivial-reject: all three vertices outside one plane.
        if compute_outcode(ndc[0]) & compute_outcode(ndc[1]) & compute_outcode(ndc[2]) != 0 {
            continue;
        }

        let screen = [
            ndc_to_screen(ndc[0], width, height),
            ndc_to_screen(ndc[1], width, height),
            ndc_to_screen(ndc[2], width, height),
        ];

        let p0 = [round_to_pixel(screen[0].x), round_to_pixel(screen[0].y)];
        let p1 = [round_to_pixel(screen[1].x), round_to_pixel(screen[1].y)];
        let p2 = [round_to_pixel(screen[2].x), round_to_pixel(screen[2].y)];

        let aabb = Aabb::of_triangle(p0, p1, p2).clamp_to(width, height);
        fill_triangle(buffer, p0, p1, p2, aabb, color);
    }
}

/// Renders a mesh as a wireframe over its unique edge list.
///
/// Each edge runs the same transform chain as the filled path but with a
/// two-vertex near-plane rejection and no back-face or frustum culling;
/// off-screen pixels are dropped by the line rasterizer.
pub fn draw_wireframe(
    mesh: &Mesh,
    transform: &Transform,
    camera: &mut Camera,
    buffer: &mut PixelBuffer,
    color: u32,
) {
    let mvp = camera.view_projection_matrix() * transform.to_matrix();
    let vertices = mesh.vertices();
    let (width, height) = (buffer.width(), buffer.height());

    for edge in mesh.edges() {
        let clip_a = mvp * vertices[edge.a as usize];
        let clip_b = mvp * vertices[edge.b as usize];

        if clip_a.w <= 0.0 || clip_b.w <= 0.0 {
            continue;
        }

        let screen_a = ndc_to_screen(clip_a.perspective_divide(), width, height);
        let screen_b = ndc_to_screen(clip_b.perspective_divide(), width, height);

        draw_line(
            buffer,
            round_to_pixel(screen_a.x),
            round_to_pixel(screen_a.y),
            round_to_pixel(screen_b.x),
            round_to_pixel(screen_b.y),
            color,
        );
    }
}
