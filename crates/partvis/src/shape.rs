//! Shape proxies over a host scene.

use glam::{Mat4, Vec3};
use partvis_core::{HostScene, Result, ShapeKind};

/// A named primitive node living in the host scene.
///
/// The proxy caches the transform it last saw, but the host stays
/// authoritative: every accessor is a synchronous host round-trip that
/// overwrites the cache as a side effect. The cached values are advisory
/// only and can be read without a round-trip via the `cached_*` methods.
pub struct Shape<'a> {
    scene: &'a dyn HostScene,
    name: String,
    kind: ShapeKind,
    position: Vec3,
    rotation: Vec3,
    matrix: Mat4,
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("matrix", &self.matrix)
            .finish()
    }
}

impl<'a> Shape<'a> {
    /// Spawns a shape of the given kind in the host scene.
    ///
    /// Equivalent to [`ShapeBuilder::new`] followed by
    /// [`ShapeBuilder::spawn`]; use the builder to set an initial transform
    /// or a non-default size.
    pub fn spawn(scene: &'a dyn HostScene, name: &str, kind: ShapeKind) -> Result<Self> {
        ShapeBuilder::new(name, kind).spawn(scene)
    }

    /// Returns the node's actual name in the host scene.
    ///
    /// This may differ from the requested name if the host renamed on
    /// creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind this shape was created as.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Queries the world-space position from the host, updating the cache.
    pub fn position(&mut self) -> Result<Vec3> {
        self.position = self.scene.translation(&self.name)?;
        Ok(self.position)
    }

    /// Sets the world-space position in the host.
    ///
    /// The cache is updated only once the host accepts the command.
    pub fn set_position(&mut self, position: Vec3) -> Result<()> {
        self.scene.set_translation(&self.name, position)?;
        self.position = position;
        Ok(())
    }

    /// Queries the world-space rotation (Euler XYZ degrees) from the host,
    /// updating the cache.
    pub fn rotation(&mut self) -> Result<Vec3> {
        self.rotation = self.scene.rotation(&self.name)?;
        Ok(self.rotation)
    }

    /// Sets the world-space rotation (Euler XYZ degrees) in the host.
    pub fn set_rotation(&mut self, rotation: Vec3) -> Result<()> {
        self.scene.set_rotation(&self.name, rotation)?;
        self.rotation = rotation;
        Ok(())
    }

    /// Queries the full world-space transform matrix from the host,
    /// updating the cache.
    pub fn matrix(&mut self) -> Result<Mat4> {
        self.matrix = self.scene.matrix(&self.name)?;
        Ok(self.matrix)
    }

    /// Sets the full world-space transform matrix in the host.
    pub fn set_matrix(&mut self, matrix: Mat4) -> Result<()> {
        self.scene.set_matrix(&self.name, matrix)?;
        self.matrix = matrix;
        Ok(())
    }

    /// Re-snapshots position, rotation, and matrix from the host.
    pub fn refresh(&mut self) -> Result<()> {
        self.position = self.scene.translation(&self.name)?;
        self.rotation = self.scene.rotation(&self.name)?;
        self.matrix = self.scene.matrix(&self.name)?;
        Ok(())
    }

    /// Returns the position from the last host round-trip, without querying.
    #[must_use]
    pub fn cached_position(&self) -> Vec3 {
        self.position
    }

    /// Returns the rotation from the last host round-trip, without querying.
    #[must_use]
    pub fn cached_rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Returns the matrix from the last host round-trip, without querying.
    #[must_use]
    pub fn cached_matrix(&self) -> Mat4 {
        self.matrix
    }
}

/// Builder for spawning a [`Shape`] with optional initial transform.
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    name: String,
    kind: ShapeKind,
    position: Option<Vec3>,
    rotation: Option<Vec3>,
}

impl ShapeBuilder {
    /// Creates a builder for a shape of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: None,
            rotation: None,
        }
    }

    /// Creates a builder for a sphere with the default radius.
    #[must_use]
    pub fn sphere(name: impl Into<String>) -> Self {
        Self::new(name, ShapeKind::sphere())
    }

    /// Creates a builder for a cube with the default edge length.
    #[must_use]
    pub fn cube(name: impl Into<String>) -> Self {
        Self::new(name, ShapeKind::cube())
    }

    /// Sets the size parameter (radius for spheres, edge length for cubes).
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.kind = self.kind.with_size(size);
        self
    }

    /// Sets the initial world-space position.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the initial world-space rotation (Euler XYZ degrees).
    #[must_use]
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Spawns the shape in the host scene.
    ///
    /// If a node with the requested name already exists it is adopted
    /// unchanged (no duplicate is created); otherwise the kind's creation
    /// command is issued and the host's actual node name recorded. The
    /// optional initial position and rotation are then applied, and the
    /// proxy's caches are snapshotted from the host.
    pub fn spawn(self, scene: &dyn HostScene) -> Result<Shape<'_>> {
        let name = if scene.exists(&self.name) {
            self.name
        } else {
            scene.create_primitive(self.kind, &self.name)?
        };
        log::debug!("spawned {} '{name}'", self.kind.type_name());

        if let Some(position) = self.position {
            scene.set_translation(&name, position)?;
        }
        if let Some(rotation) = self.rotation {
            scene.set_rotation(&name, rotation)?;
        }

        let mut shape = Shape {
            scene,
            name,
            kind: self.kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            matrix: Mat4::IDENTITY,
        };
        shape.refresh()?;
        Ok(shape)
    }
}
