//! Transform component for 3D objects.
//!
//! Provides a [`Transform`] struct with a fluent API for managing position,
//! rotation (quaternion), and non-uniform scale.

use crate::math::{mat4::Mat4, quat::Quat, vec3::Vec3};

/// A 3D transform with position, rotation, and scale.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(5.0, 2.0, 0.0)
///     .rotate(Quat::from_axis_angle(Vec3::Y, 0.1))
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0,
    /// rotation=identity, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quat) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Applies an additional rotation on top of the current one.
    ///
    /// Renormalizes to keep the quaternion unit-length across many
    /// incremental updates.
    pub fn rotate(&mut self, delta: Quat) -> &mut Self {
        self.rotation = (delta * self.rotation).normalize();
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    /// Generate the model matrix.
    ///
    /// Order: Translation * (Rotation * Scale) - scale applied first, then
    /// rotation, then translation.
    pub fn to_matrix(&self) -> Mat4 {
        let rotation_scale =
            self.rotation.to_mat4() * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z);
        Mat4::translation(self.position.x, self.position.y, self.position.z) * rotation_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn default_transform_is_identity() {
        let m = Transform::default().to_matrix();
        assert_eq!(m, Mat4::identity());
    }

    #[test]
    fn fluent_api_chains() {
        let mut t = Transform::new();
        t.set_position_xyz(1.0, 2.0, 3.0).set_scale_uniform(2.0);
        assert_eq!(t.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn scale_applies_before_rotation_and_translation() {
        let mut t = Transform::new();
        t.set_position_xyz(10.0, 0.0, 0.0)
            .set_rotation(Quat::from_axis_angle(Vec3::Y, FRAC_PI_2))
            .set_scale(Vec3::new(1.0, 1.0, 3.0));

        // (0,0,1) scales to (0,0,3), rotates to (3,0,0), translates to (13,0,0)
        let v = t.to_matrix() * Vec4::point(0.0, 0.0, 1.0);
        assert_relative_eq!(v.x, 13.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rotate_composes_with_existing_rotation() {
        let mut t = Transform::new();
        t.rotate(Quat::from_axis_angle(Vec3::Y, FRAC_PI_2))
            .rotate(Quat::from_axis_angle(Vec3::Y, FRAC_PI_2));

        // Two quarter turns: (0,0,1) ends up at (0,0,-1)
        let v = t.to_matrix() * Vec4::point(0.0, 0.0, 1.0);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-5);
    }
}
