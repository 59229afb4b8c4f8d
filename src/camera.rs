//! Camera with lazily cached view/projection matrices.
//!
//! The camera stores its position, orientation, and perspective parameters,
//! and caches the derived view, projection, and combined view-projection
//! matrices behind two dirty flags. Mutating the transform invalidates the
//! view matrix; mutating the projection parameters invalidates the
//! projection matrix; the combined product is rebuilt only when either
//! input changed.
//!
//! # Coordinate System
//!
//! Right-handed view space: the camera looks toward -Z, +Y is up. The Y
//! axis flips at the viewport stage, not here.

use crate::math::mat4::Mat4;
use crate::math::quat::Quat;
use crate::math::vec3::Vec3;

/// Camera parameter validation errors.
///
/// Raised at configuration time only; the render path assumes parameters
/// were validated here and never re-checks them.
#[derive(thiserror::Error, Debug)]
pub enum CameraError {
    #[error("clip planes must satisfy 0 < near < far (near={near}, far={far})")]
    InvalidClipPlanes { near: f32, far: f32 },

    #[error("aspect ratio must be positive (got {0})")]
    InvalidAspectRatio(f32),

    #[error("vertical field of view must be in (0, PI) radians (got {0})")]
    InvalidFieldOfView(f32),
}

/// A perspective camera with cached matrices.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    rotation: Quat,

    fov_y: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,

    view: Mat4,
    projection: Mat4,
    view_projection: Mat4,

    view_dirty: bool,
    projection_dirty: bool,
}

impl Camera {
    /// Creates a camera and marks both matrix caches dirty.
    ///
    /// # Arguments
    /// * `position`, `rotation` - world-space camera transform
    /// * `fov_y` - vertical field of view in radians, in (0, PI)
    /// * `aspect_ratio` - viewport width / height, positive
    /// * `near`, `far` - clip distances, `0 < near < far`
    pub fn new(
        position: Vec3,
        rotation: Quat,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, CameraError> {
        validate_projection(fov_y, aspect_ratio, near, far)?;
        Ok(Self {
            position,
            rotation,
            fov_y,
            aspect_ratio,
            near,
            far,
            view: Mat4::identity(),
            projection: Mat4::identity(),
            view_projection: Mat4::identity(),
            view_dirty: true,
            projection_dirty: true,
        })
    }

    /// Overwrites position and rotation, invalidating the view matrix.
    pub fn set_transform(&mut self, position: Vec3, rotation: Quat) {
        self.position = position;
        self.rotation = rotation;
        self.view_dirty = true;
    }

    /// Overwrites the projection parameters, invalidating the projection
    /// matrix.
    pub fn set_projection(
        &mut self,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<(), CameraError> {
        validate_projection(fov_y, aspect_ratio, near, far)?;
        self.fov_y = fov_y;
        self.aspect_ratio = aspect_ratio;
        self.near = near;
        self.far = far;
        self.projection_dirty = true;
        Ok(())
    }

    /// Updates only the aspect ratio (typically on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<(), CameraError> {
        self.set_projection(self.fov_y, aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix, recomputing only the
    /// stale parts.
    ///
    /// The view matrix is the inverse of the camera's world transform
    /// `Translate(position) * Rotate(rotation)`; the projection is a
    /// right-handed perspective matrix. Repeated calls with no intervening
    /// mutation return the cached product without recomputation.
    pub fn view_projection_matrix(&mut self) -> Mat4 {
        let needs_combine = self.view_dirty || self.projection_dirty;

        if self.view_dirty {
            let world = Mat4::translation(self.position.x, self.position.y, self.position.z)
                * self.rotation.to_mat4();
            self.view = world.inverse().unwrap_or_else(Mat4::identity);
            self.view_dirty = false;
        }

        if self.projection_dirty {
            self.projection =
                Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far);
            self.projection_dirty = false;
        }

        if needs_combine {
            self.view_projection = self.projection * self.view;
        }

        self.view_projection
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }
}

fn validate_projection(
    fov_y: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
) -> Result<(), CameraError> {
    if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
        return Err(CameraError::InvalidFieldOfView(fov_y));
    }
    if !(aspect_ratio > 0.0) {
        return Err(CameraError::InvalidAspectRatio(aspect_ratio));
    }
    if !(0.0 < near && near < far) {
        return Err(CameraError::InvalidClipPlanes { near, far });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Quat::IDENTITY,
            FRAC_PI_4,
            4.0 / 3.0,
            0.1,
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn repeated_calls_return_identical_matrices() {
        let mut camera = test_camera();
        let first = camera.view_projection_matrix();
        let second = camera.view_projection_matrix();
        assert_eq!(first, second);
    }

    #[test]
    fn first_call_clears_both_dirty_flags() {
        let mut camera = test_camera();
        assert!(camera.view_dirty);
        assert!(camera.projection_dirty);

        camera.view_projection_matrix();
        assert!(!camera.view_dirty);
        assert!(!camera.projection_dirty);
    }

    #[test]
    fn clean_camera_does_not_recompute() {
        let mut camera = test_camera();
        camera.view_projection_matrix();

        // Plant a sentinel in the cache; a second call must return it
        // untouched since nothing was invalidated.
        let sentinel = Mat4::translation(7.0, 8.0, 9.0);
        camera.view_projection = sentinel;
        assert_eq!(camera.view_projection_matrix(), sentinel);
    }

    #[test]
    fn set_transform_invalidates_only_the_view() {
        let mut camera = test_camera();
        camera.view_projection_matrix();

        camera.set_transform(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
        assert!(camera.view_dirty);
        assert!(!camera.projection_dirty);
    }

    #[test]
    fn set_projection_invalidates_only_the_projection() {
        let mut camera = test_camera();
        camera.view_projection_matrix();

        camera.set_projection(FRAC_PI_2, 1.0, 0.5, 50.0).unwrap();
        assert!(camera.projection_dirty);
        assert!(!camera.view_dirty);
    }

    #[test]
    fn mutation_changes_the_combined_matrix() {
        let mut camera = test_camera();
        let before = camera.view_projection_matrix();

        camera.set_transform(Vec3::new(0.0, 0.0, 10.0), Quat::IDENTITY);
        let after = camera.view_projection_matrix();
        assert_ne!(before, after);
    }

    #[test]
    fn view_matrix_moves_world_into_camera_space() {
        let mut camera = test_camera();
        camera.view_projection_matrix();

        // Camera sits at z=5 looking toward -Z: the world origin should be
        // 5 units in front (view z = -5).
        let origin = camera.view * crate::math::vec4::Vec4::point(0.0, 0.0, 0.0);
        assert_relative_eq!(origin.z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let make = |fov: f32, aspect: f32, near: f32, far: f32| {
            Camera::new(Vec3::ZERO, Quat::IDENTITY, fov, aspect, near, far)
        };

        assert!(matches!(
            make(FRAC_PI_4, 1.0, 0.0, 100.0),
            Err(CameraError::InvalidClipPlanes { .. })
        ));
        assert!(matches!(
            make(FRAC_PI_4, 1.0, 10.0, 1.0),
            Err(CameraError::InvalidClipPlanes { .. })
        ));
        assert!(matches!(
            make(FRAC_PI_4, 0.0, 0.1, 100.0),
            Err(CameraError::InvalidAspectRatio(_))
        ));
        assert!(matches!(
            make(0.0, 1.0, 0.1, 100.0),
            Err(CameraError::InvalidFieldOfView(_))
        ));
    }
}
