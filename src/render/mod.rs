//! Pixel storage and rasterization backends.

mod framebuffer;
mod rasterizer;

pub use framebuffer::PixelBuffer;
pub use rasterizer::{draw_line, fill_triangle, Aabb};
