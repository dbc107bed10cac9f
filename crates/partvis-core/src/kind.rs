//! Shape kinds and their creation parameters.

use serde::{Deserialize, Serialize};

/// Default radius for sphere particles.
pub const DEFAULT_SPHERE_RADIUS: f32 = 0.1;

/// Default edge length for cube particles.
pub const DEFAULT_CUBE_SIZE: f32 = 0.2;

/// The primitive a particle is visualized as, with its size parameter.
///
/// Variant dispatch is data: a host binding maps each kind to the matching
/// creation command (polygonal sphere, polygonal cube).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A polygonal sphere parameterized by radius.
    Sphere {
        /// Sphere radius in scene units.
        radius: f32,
    },
    /// A polygonal cube with uniform width, height, and depth.
    Cube {
        /// Edge length in scene units.
        size: f32,
    },
}

impl ShapeKind {
    /// A sphere with the default radius.
    #[must_use]
    pub fn sphere() -> Self {
        Self::Sphere {
            radius: DEFAULT_SPHERE_RADIUS,
        }
    }

    /// A cube with the default edge length.
    #[must_use]
    pub fn cube() -> Self {
        Self::Cube {
            size: DEFAULT_CUBE_SIZE,
        }
    }

    /// Returns the type name of this kind (e.g., "`Sphere`", "`Cube`").
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "Sphere",
            Self::Cube { .. } => "Cube",
        }
    }

    /// Returns the size parameter (radius for spheres, edge length for cubes).
    #[must_use]
    pub fn size(&self) -> f32 {
        match self {
            Self::Sphere { radius } => *radius,
            Self::Cube { size } => *size,
        }
    }

    /// Returns this kind with its size parameter replaced.
    #[must_use]
    pub fn with_size(self, size: f32) -> Self {
        match self {
            Self::Sphere { .. } => Self::Sphere { radius: size },
            Self::Cube { .. } => Self::Cube { size },
        }
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::sphere()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(
            ShapeKind::sphere(),
            ShapeKind::Sphere {
                radius: DEFAULT_SPHERE_RADIUS
            }
        );
        assert_eq!(ShapeKind::default(), ShapeKind::sphere());
        assert_eq!(ShapeKind::cube().size(), DEFAULT_CUBE_SIZE);
    }

    #[test]
    fn test_with_size_preserves_variant() {
        let kind = ShapeKind::cube().with_size(1.5);
        assert_eq!(kind, ShapeKind::Cube { size: 1.5 });
        assert_eq!(kind.type_name(), "Cube");
    }
}
