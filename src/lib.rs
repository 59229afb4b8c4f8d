//! A CPU-based software-rendered 3D graphics pipeline.
//!
//! This crate transforms mesh geometry through a classic software pipeline
//! (model matrix, MVP, clip, cull, viewport) and rasterizes filled or
//! wireframe images into an in-memory pixel buffer. SDL2 is used only for
//! window management and display; all rendering happens on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastly::prelude::*;
//!
//! let mut buffer = PixelBuffer::new(800, 600);
//! let mut camera = Camera::new(
//!     Vec3::new(0.0, 0.0, 5.0),
//!     Quat::IDENTITY,
//!     45f32.to_radians(),
//!     800.0 / 600.0,
//!     0.1,
//!     100.0,
//! )?;
//! let mesh = Mesh::cube();
//! pipeline::draw_wireframe(&mesh, &Transform::new(), &mut camera, &mut buffer, colors::WIREFRAME);
//! ```

pub mod camera;
pub mod colors;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod render;
pub mod transform;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, CameraError};
pub use mesh::{Edge, Mesh, MeshError};
pub use render::PixelBuffer;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastly::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, CameraError};

    // Mesh
    pub use crate::mesh::{Edge, Mesh, MeshError};

    // Pipeline
    pub use crate::pipeline::{draw_filled, draw_wireframe};

    // Transform
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::quat::Quat;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::colors;
    pub use crate::render::PixelBuffer;

    // Window
    pub use crate::window::{FrameLimiter, Key, Window, WindowEvent};
}
