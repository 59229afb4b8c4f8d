//! Line and filled-triangle rasterization backends.
//!
//! Two backends write into a [`PixelBuffer`]:
//!
//! - [`draw_line`]: integer Bresenham, used for wireframe edges and
//!   debugging overlays.
//! - [`fill_triangle`]: incremental edge-function fill over a clamped
//!   bounding box, used for solid triangles.
//!
//! Both operate on integer screen coordinates; the geometry pipeline rounds
//! floating-point screen positions before calling in.

use super::framebuffer::PixelBuffer;

/// Screen-space bounding box, inclusive on all sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Aabb {
    /// Bounding box of three integer points.
    pub fn of_triangle(v0: [i32; 2], v1: [i32; 2], v2: [i32; 2]) -> Self {
        Self {
            min_x: v0[0].min(v1[0]).min(v2[0]),
            min_y: v0[1].min(v1[1]).min(v2[1]),
            max_x: v0[0].max(v1[0]).max(v2[0]),
            max_y: v0[1].max(v1[1]).max(v2[1]),
        }
    }

    /// Clamps the box to `[0, width-1] x [0, height-1]`.
    ///
    /// A box entirely outside the buffer becomes empty.
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        Self {
            min_x: self.min_x.max(0),
            min_y: self.min_y.max(0),
            max_x: self.max_x.min(width as i32 - 1),
            max_y: self.max_y.min(height as i32 - 1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Draws a line between two points using Bresenham's algorithm.
///
/// Purely horizontal and purely vertical segments take a fast path: a
/// single loop over the varying axis with no error accumulator. The general
/// case tracks one error term with `dx = |x1-x0|`, `dy = -|y1-y0|` and
/// applies both the horizontal- and vertical-favoring corrections each
/// iteration, so it works in any octant.
///
/// Both endpoints are drawn. Out-of-bounds pixels are silently dropped per
/// pixel; the line itself is never clipped.
pub fn draw_line(buffer: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    if y0 == y1 {
        for x in x0.min(x1)..=x0.max(x1) {
            buffer.set_pixel(x, y0, color);
        }
        return;
    }

    if x0 == x1 {
        for y in y0.min(y1)..=y0.max(y1) {
            buffer.set_pixel(x0, y, color);
        }
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let mut err = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        buffer.set_pixel(x, y, color);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Fills a triangle using incremental edge functions.
///
/// The three edge values are evaluated once at the top-left corner of
/// `aabb`, then updated incrementally: moving one pixel right subtracts the
/// edge's dy, moving one row down adds the edge's dx. A pixel is inside
/// when all three values are >= 0, which holds for the winding that
/// survives the pipeline's back-face cull.
///
/// Pixels exactly on an edge are included; there is no top-left tie-break,
/// so adjacent triangles sharing an edge may double-draw or gap along it.
///
/// `aabb` must already be clamped to the buffer (see [`Aabb::clamp_to`]);
/// an empty box fills nothing.
pub fn fill_triangle(
    buffer: &mut PixelBuffer,
    v0: [i32; 2],
    v1: [i32; 2],
    v2: [i32; 2],
    aabb: Aabb,
    color: u32,
) {
    if aabb.is_empty() {
        return;
    }

    // 64-bit arithmetic: vertices may sit far outside the buffer (the
    // pipeline only clamps the box, not the vertices), so the corner
    // products can exceed 32 bits.
    let (dx01, dy01) = ((v1[0] - v0[0]) as i64, (v1[1] - v0[1]) as i64);
    let (dx12, dy12) = ((v2[0] - v1[0]) as i64, (v2[1] - v1[1]) as i64);
    let (dx20, dy20) = ((v0[0] - v2[0]) as i64, (v0[1] - v2[1]) as i64);

    // Edge values at the top-left corner of the bounding box
    let mut w0_row = dx01 * (aabb.min_y - v0[1]) as i64 - dy01 * (aabb.min_x - v0[0]) as i64;
    let mut w1_row = dx12 * (aabb.min_y - v1[1]) as i64 - dy12 * (aabb.min_x - v1[0]) as i64;
    let mut w2_row = dx20 * (aabb.min_y - v2[1]) as i64 - dy20 * (aabb.min_x - v2[0]) as i64;

    for y in aabb.min_y..=aabb.max_y {
        let mut w0 = w0_row;
        let mut w1 = w1_row;
        let mut w2 = w2_row;

        for x in aabb.min_x..=aabb.max_x {
            if w0 >= 0 && w1 >= 0 && w2 >= 0 {
                buffer.set_pixel(x, y, color);
            }
            w0 -= dy01;
            w1 -= dy12;
            w2 -= dy20;
        }

        w0_row += dx01;
        w1_row += dx12;
        w2_row += dx20;
    }
}
