//! Decomposed world-space transforms.
//!
//! Hosts expose a node's transform three ways: translation, Euler rotation,
//! and the full matrix. [`Transform`] stores the decomposed components so
//! the three views stay mutually consistent.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A world-space transformation as separate components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    /// Translation component.
    pub translation: Vec3,
    /// Rotation component as a quaternion.
    pub rotation: Quat,
    /// Scale component.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Creates a new identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a transform from a translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Creates a transform from a Mat4.
    ///
    /// This decomposition may not be exact for matrices with shear.
    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Converts this transform to a Mat4.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Returns the rotation as Euler XYZ angles (in radians).
    #[must_use]
    pub fn euler_angles(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    /// Sets the rotation from Euler XYZ angles (in radians).
    pub fn set_euler_angles(&mut self, angles: Vec3) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z);
    }

    /// Returns the rotation as Euler XYZ angles (in degrees).
    #[must_use]
    pub fn euler_angles_degrees(&self) -> Vec3 {
        self.euler_angles() * (180.0 / std::f32::consts::PI)
    }

    /// Sets the rotation from Euler XYZ angles (in degrees).
    pub fn set_euler_angles_degrees(&mut self, degrees: Vec3) {
        self.set_euler_angles(degrees * (std::f32::consts::PI / 180.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transform_matrix_roundtrip() {
        let t = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        };
        let matrix = t.to_matrix();
        let back = Transform::from_matrix(matrix);
        assert!((back.translation - t.translation).length() < 1e-6);
    }

    #[test]
    fn test_transform_euler_angles() {
        let mut t = Transform::identity();
        t.set_euler_angles_degrees(Vec3::new(0.0, 90.0, 0.0));
        let angles = t.euler_angles_degrees();
        assert!((angles.y - 90.0).abs() < 0.1);
    }

    proptest! {
        #[test]
        fn prop_translation_survives_matrix_roundtrip(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            z in -100.0f32..100.0,
        ) {
            let t = Transform::from_translation(Vec3::new(x, y, z));
            let back = Transform::from_matrix(t.to_matrix());
            prop_assert!((back.translation - t.translation).length() < 1e-3);
        }

        #[test]
        fn prop_euler_roundtrip_within_gimbal_safe_range(
            // Stay away from the +-90 degree pitch singularity.
            x in -80.0f32..80.0,
            y in -80.0f32..80.0,
            z in -80.0f32..80.0,
        ) {
            let mut t = Transform::identity();
            t.set_euler_angles_degrees(Vec3::new(x, y, z));
            let angles = t.euler_angles_degrees();
            prop_assert!((angles - Vec3::new(x, y, z)).length() < 0.1);
        }
    }
}
